//! PDF assembly with `lopdf`.
//!
//! Each page of the paged document becomes one A4 page drawn with the standard
//! Helvetica fonts, using exactly the line breaks the layout pass measured.
//! An unpaginated document is drawn as one tall canvas and cut into page-height
//! bands. Text is encoded in WinAnsi; the page tree and resources follow the
//! minimal catalog → pages → page structure.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::export::bands::{band_index, band_offsets};
use crate::export::ExportError;
use crate::layout::font_metrics::PageConfig;
use crate::layout::measure::{layout_heading, layout_lines, PlacedLine, BULLET_INDENT_PT};
use crate::layout::pagination::{Fragment, Page};
use crate::models::{SectionId, Template};
use crate::render::blocks::TextRole;
use crate::render::RenderedResume;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
/// WinAnsi code of the bullet glyph.
const BULLET_CODE: u8 = 0x95;
/// Baseline sits this fraction of the font size below the top of a line.
const ASCENT_RATIO: f32 = 0.8;

type Rgb = (f32, f32, f32);

const BLACK: Rgb = (0.0, 0.0, 0.0);
const WHITE: Rgb = (1.0, 1.0, 1.0);

/// One drawing instruction positioned relative to the top-left of the content area.
#[derive(Debug, Clone)]
enum Mark {
    Text {
        x: f32,
        top: f32,
        line: PlacedLine,
        color: Rgb,
    },
    Rect {
        top: f32,
        height: f32,
        color: Rgb,
    },
    Rule {
        top: f32,
    },
}

impl Mark {
    fn top(&self) -> f32 {
        match self {
            Mark::Text { top, .. } | Mark::Rect { top, .. } | Mark::Rule { top } => *top,
        }
    }

    fn bottom(&self) -> f32 {
        match self {
            Mark::Text { top, line, .. } => top + line.height,
            Mark::Rect { top, height, .. } => top + height,
            Mark::Rule { top } => *top,
        }
    }

    fn shifted(mut self, by: f32) -> Self {
        match &mut self {
            Mark::Text { top, .. } | Mark::Rect { top, .. } | Mark::Rule { top } => *top -= by,
        }
        self
    }
}

/// Maps a character to its WinAnsi (cp1252) code. Turkish letters outside the
/// code page are transliterated; anything else becomes `?`.
pub fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        'ş' => b's',
        'Ş' => b'S',
        'ğ' => b'g',
        'Ğ' => b'G',
        'ı' => b'i',
        'İ' => b'I',
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => BULLET_CODE,
        '–' => 0x96,
        '—' => 0x97,
        '\t' => b' ',
        // Combining dot left over from lowercasing 'İ'.
        '\u{307}' => 0,
        _ => b'?',
    }
}

pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(win_ansi_byte)
        .filter(|&b| b != 0)
        .collect()
}

fn accent_rgb(resume: &RenderedResume) -> Rgb {
    match resume.policy.accent {
        Some(accent) => {
            let (r, g, b) = accent.rgb();
            (
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
            )
        }
        None => BLACK,
    }
}

/// Lays out the fragments of one page (or of the whole unpaginated canvas) as marks.
/// Returns the marks and the total height consumed.
fn page_marks(resume: &RenderedResume, page_config: &PageConfig, fragments: &[Fragment]) -> (Vec<Mark>, f32) {
    let width = page_config.content_width();
    let typography = &resume.policy.typography;
    let accent = accent_rgb(resume);
    let mut marks = Vec::new();
    let mut cursor = 0.0_f32;

    for (index, fragment) in fragments.iter().enumerate() {
        let Some(block) = resume.blocks.iter().find(|b| b.section == fragment.section) else {
            continue;
        };
        if index > 0 {
            cursor += typography.section_gap_pt;
        }

        if !fragment.continued {
            let heading = layout_heading(block, &resume.policy, width);
            if !heading.is_empty() {
                for line in heading {
                    let height = line.height;
                    marks.push(Mark::Text {
                        x: 0.0,
                        top: cursor,
                        line,
                        color: accent,
                    });
                    cursor += height;
                }
                if resume.policy.template == Template::Classic {
                    marks.push(Mark::Rule { top: cursor + 1.0 });
                }
                cursor += typography.heading_gap_pt;
            }
        }

        let banded = fragment.section == SectionId::Profile && resume.policy.header_band;
        for item in block.items.get(fragment.items.clone()).unwrap_or_default() {
            let lines = layout_lines(&item.lines, &resume.policy, width);
            let item_height: f32 = lines.iter().map(|l| l.height).sum();
            let color = if banded {
                marks.push(Mark::Rect {
                    top: cursor,
                    height: item_height + typography.item_gap_pt / 2.0,
                    color: accent,
                });
                WHITE
            } else {
                BLACK
            };
            for line in lines {
                let height = line.height;
                let x = if line.role == TextRole::Bullet {
                    BULLET_INDENT_PT
                } else {
                    0.0
                };
                marks.push(Mark::Text {
                    x,
                    top: cursor,
                    line,
                    color,
                });
                cursor += height;
            }
            cursor += typography.item_gap_pt;
        }
    }
    (marks, cursor)
}

fn real(v: f32) -> Object {
    Object::Real(v)
}

fn set_fill(ops: &mut Vec<Operation>, (r, g, b): Rgb) {
    ops.push(Operation::new("rg", vec![real(r), real(g), real(b)]));
}

fn text_ops(ops: &mut Vec<Operation>, x: f32, baseline: f32, size: f32, bold: bool, bytes: Vec<u8>) {
    let font = if bold { FONT_BOLD } else { FONT_REGULAR };
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), real(size)]));
    ops.push(Operation::new("Td", vec![real(x), real(baseline)]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(bytes, StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Content stream operations for one PDF page.
fn page_operations(marks: &[Mark], page_config: &PageConfig) -> Vec<Operation> {
    let margin = page_config.margin_pt;
    let top_y = page_config.page_height_pt - margin;
    let mut ops = Vec::new();

    for mark in marks {
        match mark {
            Mark::Rect { top, height, color } => {
                set_fill(&mut ops, *color);
                // Bleeds to the page edges; the first band reaches the top of the sheet.
                let y = top_y - top - height;
                let full_height = if *top <= 0.0 { height + margin } else { *height };
                ops.push(Operation::new(
                    "re",
                    vec![
                        real(0.0),
                        real(y),
                        real(page_config.page_width_pt),
                        real(full_height),
                    ],
                ));
                ops.push(Operation::new("f", vec![]));
            }
            Mark::Rule { top } => {
                let y = top_y - top;
                ops.push(Operation::new("w", vec![real(0.5)]));
                ops.push(Operation::new("m", vec![real(margin), real(y)]));
                ops.push(Operation::new(
                    "l",
                    vec![real(page_config.page_width_pt - margin), real(y)],
                ));
                ops.push(Operation::new("S", vec![]));
            }
            Mark::Text { x, top, line, color } => {
                set_fill(&mut ops, *color);
                let baseline = top_y - top - line.size_pt * ASCENT_RATIO;
                if line.bullet_start {
                    text_ops(
                        &mut ops,
                        margin,
                        baseline,
                        line.size_pt,
                        false,
                        vec![BULLET_CODE],
                    );
                }
                text_ops(
                    &mut ops,
                    margin + x,
                    baseline,
                    line.size_pt,
                    line.bold,
                    encode_win_ansi(&line.text),
                );
            }
        }
    }
    ops
}

/// Mark lists, one per output PDF page.
fn pdf_pages(resume: &RenderedResume, page_config: &PageConfig) -> Vec<Vec<Mark>> {
    let document = &resume.document;
    if document.pages.is_empty() {
        return vec![Vec::new()];
    }
    if document.paginated {
        return document
            .pages
            .iter()
            .map(|page: &Page| page_marks(resume, page_config, &page.fragments).0)
            .collect();
    }

    // Unpaginated: one tall canvas cut into bands of one content height.
    let fragments: Vec<Fragment> = document
        .pages
        .iter()
        .flat_map(|p| p.fragments.iter().cloned())
        .collect();
    let (marks, _) = page_marks(resume, page_config, &fragments);
    let extents: Vec<(f32, f32)> = marks.iter().map(|m| (m.top(), m.bottom())).collect();
    let offsets = band_offsets(&extents, page_config.content_height());
    let mut bands: Vec<Vec<Mark>> = vec![Vec::new(); offsets.len()];
    for mark in marks {
        let index = band_index(&offsets, mark.top());
        bands[index].push(mark.shifted(offsets[index]));
    }
    bands
}

/// Builds the PDF bytes for a rendered resume.
pub fn build_pdf(resume: &RenderedResume, page_config: &PageConfig) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular_id,
            FONT_BOLD => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for marks in pdf_pages(resume, page_config) {
        let content = Content {
            operations: page_operations(&marks, page_config),
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            real(0.0),
            real(0.0),
            real(page_config.page_width_pt),
            real(page_config.page_height_pt),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Write(e.to_string()))?;
    Ok(bytes)
}
