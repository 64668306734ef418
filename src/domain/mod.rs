mod admission;
mod display_format;
mod document;
mod document_id;
mod storage_path;
mod summary;
mod summary_depth;

pub use admission::Admission;
pub use display_format::{DisplayFormat, Layout, Section, suggest_display_format};
pub use document::{ContentType, Document};
pub use document_id::DocumentId;
pub use storage_path::StoragePath;
pub use summary::Summary;
pub use summary_depth::{LengthRatio, SummaryDepth};
