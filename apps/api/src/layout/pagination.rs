//! Page chunking: greedy placement of measured sections into A4 pages.
//!
//! Rules:
//! - A section goes on the current page when it fits the remaining budget.
//! - Otherwise, when it fits a fresh page, the current page is closed first.
//! - A section taller than a whole page is split between items; the heading travels
//!   with the first item. An item taller than a page is placed alone and overflows.
//! - No page is ever empty and every item lands exactly once.

use std::ops::Range;

use serde::Serialize;
use tracing::{debug, warn};

use crate::layout::font_metrics::PageConfig;
use crate::layout::measure::{HeightMeasurer, LayoutError, MeasuredSection};
use crate::models::SectionId;
use crate::render::blocks::SectionBlock;
use crate::render::variant::VariantPolicy;

/// A contiguous run of one section's items placed on one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub section: SectionId,
    pub items: Range<usize>,
    /// True when an earlier page already carries the start of this section (no heading here).
    pub continued: bool,
    pub height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub fragments: Vec<Fragment>,
    pub used_height: Option<f32>,
    pub fill_ratio: Option<f32>,
}

/// Result of the layout pass for one document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedDocument {
    pub pages: Vec<Page>,
    /// False when the single-page fallback was used.
    pub paginated: bool,
    pub page_budget: f32,
}

#[derive(Default)]
struct PageBuilder {
    fragments: Vec<Fragment>,
    used: f32,
}

impl PageBuilder {
    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn gap(&self, section_gap: f32) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            section_gap
        }
    }

    fn push(&mut self, fragment: Fragment, used: f32) {
        self.fragments.push(fragment);
        self.used = used;
    }

    fn close(&mut self, pages: &mut Vec<Page>, budget: f32) {
        let builder = std::mem::take(self);
        if builder.fragments.is_empty() {
            return;
        }
        pages.push(Page {
            number: pages.len() + 1,
            fragments: builder.fragments,
            used_height: Some(builder.used),
            fill_ratio: Some(builder.used / budget),
        });
    }
}

fn validate(sections: &[MeasuredSection], budget: f32) -> Result<(), LayoutError> {
    if !(budget.is_finite() && budget > 0.0) {
        return Err(LayoutError::InvalidBudget(budget));
    }
    for s in sections {
        let heights = std::iter::once(&s.heading_height).chain(s.item_heights.iter());
        for &height in heights {
            if !(height.is_finite() && height >= 0.0) {
                return Err(LayoutError::InvalidHeight {
                    section: s.section,
                    height,
                });
            }
        }
    }
    Ok(())
}

/// Greedy pagination of measured sections against a page budget.
pub fn paginate(
    sections: &[MeasuredSection],
    budget: f32,
    section_gap: f32,
) -> Result<Vec<Page>, LayoutError> {
    validate(sections, budget)?;

    let mut pages = Vec::new();
    let mut current = PageBuilder::default();

    for section in sections {
        let total = section.total_height();
        let item_count = section.item_heights.len();
        let whole = |height: f32| Fragment {
            section: section.section,
            items: 0..item_count,
            continued: false,
            height: Some(height),
        };

        let with_gap = current.used + current.gap(section_gap) + total;
        if with_gap <= budget {
            current.push(whole(total), with_gap);
            continue;
        }
        if total <= budget || item_count == 0 {
            current.close(&mut pages, budget);
            current.push(whole(total), total);
            continue;
        }

        // Taller than a page: split between items.
        let heights = &section.item_heights;
        let mut next = 0;
        while next < item_count {
            let continued = next > 0;
            let heading = if continued { 0.0 } else { section.heading_height };
            let start_used = current.used + current.gap(section_gap);
            let mut used = start_used + heading;
            let mut end = next;
            while end < item_count && used + heights[end] <= budget {
                used += heights[end];
                end += 1;
            }
            if end == next {
                if !current.is_empty() {
                    current.close(&mut pages, budget);
                    continue;
                }
                used += heights[next];
                end = next + 1;
                debug!(
                    "Item {} of section {} exceeds the page budget; placed alone",
                    next, section.section
                );
            }
            current.push(
                Fragment {
                    section: section.section,
                    items: next..end,
                    continued,
                    height: Some(used - start_used),
                },
                used,
            );
            next = end;
            if next < item_count {
                current.close(&mut pages, budget);
            }
        }
    }
    current.close(&mut pages, budget);
    Ok(pages)
}

/// One unpaginated page holding every section whole.
pub fn single_page(blocks: &[SectionBlock]) -> Vec<Page> {
    if blocks.is_empty() {
        return Vec::new();
    }
    vec![Page {
        number: 1,
        fragments: blocks
            .iter()
            .map(|b| Fragment {
                section: b.section,
                items: 0..b.items.len(),
                continued: false,
                height: None,
            })
            .collect(),
        used_height: None,
        fill_ratio: None,
    }]
}

/// Measures and paginates the composed blocks, falling back to a single page on failure.
pub fn layout_document(
    blocks: &[SectionBlock],
    policy: &VariantPolicy,
    page: &PageConfig,
    measurer: &dyn HeightMeasurer,
) -> PagedDocument {
    let budget = page.content_height();
    let result = blocks
        .iter()
        .map(|b| measurer.measure(b, policy))
        .collect::<Result<Vec<_>, _>>()
        .and_then(|measured| paginate(&measured, budget, policy.typography.section_gap_pt));

    match result {
        Ok(pages) => PagedDocument {
            pages,
            paginated: true,
            page_budget: budget,
        },
        Err(e) => {
            warn!("Pagination unavailable, using a single page: {e}");
            PagedDocument {
                pages: single_page(blocks),
                paginated: false,
                page_budget: budget,
            }
        }
    }
}
