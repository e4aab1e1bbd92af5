pub mod extractor;
pub mod resolver;
pub mod score;

pub use extractor::{ScoreExtractor, Strategy};
pub use resolver::resolve_summary_document;
pub use score::MutationScore;
