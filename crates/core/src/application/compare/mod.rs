// Side-by-side comparison of two models' transcripts

pub mod date_filter;
pub mod model_catalog;
pub mod question;
pub mod scores;
pub mod side;

pub use date_filter::DateFilter;
pub use model_catalog::{ModelCatalog, DEFAULT_FEATURED_KEYWORD};
pub use question::QuestionSelector;
pub use scores::{ScoreBoard, Verdict};
pub use side::{visible_exchanges, ComparisonSide};
