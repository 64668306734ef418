pub mod image_search;
pub mod llm;
pub mod observability;
pub mod publishing;
pub mod rendering;
pub mod storage;
pub mod summarization;
pub mod text_processing;
