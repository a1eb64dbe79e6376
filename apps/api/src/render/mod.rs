// Render pipeline: visible-section composition, variant policy, layout pass, HTML preview.
// Output depends only on (data, language, template, accent color).

pub mod blocks;
pub mod handlers;
pub mod html;
pub mod variant;

use crate::layout::{layout_document, HeightMeasurer, PageConfig, PagedDocument};
use crate::session::Session;

pub use blocks::{compose, SectionBlock};
pub use variant::{variant_policy, VariantPolicy};

/// A session's resume composed, measured and paginated for one render.
pub struct RenderedResume {
    pub blocks: Vec<SectionBlock>,
    pub policy: VariantPolicy,
    pub document: PagedDocument,
}

pub fn render_session(
    session: &Session,
    page: &PageConfig,
    measurer: &dyn HeightMeasurer,
) -> RenderedResume {
    let blocks = compose(&session.data, session.language);
    let policy = variant_policy(session.template, session.accent_color);
    let document = layout_document(&blocks, &policy, page, measurer);
    RenderedResume {
        blocks,
        policy,
        document,
    }
}
