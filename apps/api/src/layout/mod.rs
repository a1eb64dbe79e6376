// Layout: font metrics, height measurement, page chunking.
// Measurement is recomputed on every request from the current resume; nothing is cached.

pub mod font_metrics;
pub mod measure;
pub mod pagination;

// Re-export the public API consumed by render, export and the handlers.
pub use font_metrics::{a4_page_config, PageConfig};
pub use measure::{HeightMeasurer, MetricMeasurer};
pub use pagination::{layout_document, PagedDocument};
