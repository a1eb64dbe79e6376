//! HTML preview: one `<div class="a4-page">` per page of the paged document.
//!
//! Every template flows its fragments in a single column at the measured content
//! width, in the order the pagination pass placed them, so a preview page holds
//! exactly what the matching PDF page holds.

use std::fmt::Write;

use crate::layout::pagination::{Fragment, PagedDocument};
use crate::models::{SectionId, Template};
use crate::render::blocks::{SectionBlock, TextLine, TextRole};
use crate::render::variant::VariantPolicy;

const PAGE_STYLE: &str = "\
.a4-page{width:210mm;min-height:297mm;padding:12mm;box-sizing:border-box;\
margin:0 auto 8mm;background:#fff;font-family:Helvetica,Arial,sans-serif;overflow:hidden}\
.band{padding:6mm;color:#fff}.section-profile{position:relative}\
.photo{position:absolute;top:0;right:0;height:100%;max-width:28mm;object-fit:cover}\
.item{margin-bottom:2mm}ul{margin:0;padding-left:5mm}";

pub struct PreviewInput<'a> {
    pub blocks: &'a [SectionBlock],
    pub document: &'a PagedDocument,
    pub policy: &'a VariantPolicy,
    pub photo_url: &'a str,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full preview document.
pub fn render_preview(input: &PreviewInput<'_>) -> String {
    let mut html = String::new();
    let template = input.policy.template.as_str();
    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Resume</title>\
         <style>{PAGE_STYLE}</style></head><body class=\"template-{template}\">"
    );

    if input.document.pages.is_empty() {
        html.push_str("<div class=\"a4-page\"></div>");
    }
    for page in &input.document.pages {
        let _ = write!(
            html,
            "<div class=\"a4-page\" data-page=\"{}\">",
            page.number
        );
        for fragment in &page.fragments {
            render_fragment(&mut html, input, fragment);
        }
        html.push_str("</div>");
    }
    html.push_str("</body></html>");
    html
}

fn heading_style(policy: &VariantPolicy) -> String {
    let mut style = String::new();
    if let Some(accent) = policy.accent {
        let _ = write!(style, "color:{};", accent.hex());
    }
    if policy.uppercase_headings {
        style.push_str("text-transform:uppercase;letter-spacing:0.05em;");
    }
    if policy.template == Template::Classic {
        style.push_str("border-bottom:1px solid #000;");
    }
    style
}

fn render_fragment(html: &mut String, input: &PreviewInput<'_>, fragment: &Fragment) {
    let Some(block) = input.blocks.iter().find(|b| b.section == fragment.section) else {
        return;
    };
    let is_profile = fragment.section == SectionId::Profile;
    let band = is_profile && input.policy.header_band;
    if band {
        let color = input
            .policy
            .accent
            .map(|a| a.hex())
            .unwrap_or_else(|| "#000000".to_string());
        let _ = write!(html, "<header class=\"band\" style=\"background:{color}\">");
    }
    let _ = write!(
        html,
        "<section class=\"section section-{}\">",
        fragment.section.as_str()
    );
    if let (Some(heading), false) = (&block.heading, fragment.continued) {
        let _ = write!(
            html,
            "<h2 style=\"{}\">{}</h2>",
            heading_style(input.policy),
            escape_html(heading)
        );
    }
    for item in block.items.get(fragment.items.clone()).unwrap_or_default() {
        html.push_str("<div class=\"item\">");
        if is_profile && !input.photo_url.trim().is_empty() {
            let _ = write!(
                html,
                "<img class=\"photo\" src=\"{}\" alt=\"\">",
                escape_html(input.photo_url)
            );
        }
        render_lines(html, &item.lines);
        html.push_str("</div>");
    }
    html.push_str("</section>");
    if band {
        html.push_str("</header>");
    }
}

fn render_lines(html: &mut String, lines: &[TextLine]) {
    let mut in_list = false;
    for line in lines {
        if line.role == TextRole::Bullet {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            let _ = write!(html, "<li>{}</li>", escape_html(&line.text));
            continue;
        }
        if in_list {
            html.push_str("</ul>");
            in_list = false;
        }
        let text = escape_html(&line.text);
        let _ = match line.role {
            TextRole::Name => write!(html, "<h1 class=\"name\">{text}</h1>"),
            TextRole::Title => write!(html, "<p class=\"title\">{text}</p>"),
            TextRole::Contact => write!(html, "<p class=\"contact\">{text}</p>"),
            TextRole::Heading => write!(html, "<h3>{text}</h3>"),
            TextRole::EntryTitle => write!(html, "<h4>{text}</h4>"),
            TextRole::EntryMeta => write!(html, "<p class=\"meta\">{text}</p>"),
            TextRole::Body | TextRole::Bullet => write!(html, "<p>{text}</p>"),
        };
    }
    if in_list {
        html.push_str("</ul>");
    }
}
