// Application Layer - Use Cases and Business Logic

pub mod catalog;
pub mod compare;
pub mod convert;
pub mod index;
pub mod latest;
pub mod leaderboard;
pub mod logs;
pub mod transcript;

// Re-exports
pub use catalog::CatalogService;
pub use compare::{
    visible_exchanges, ComparisonSide, DateFilter, ModelCatalog, QuestionSelector, ScoreBoard,
    Verdict, DEFAULT_FEATURED_KEYWORD,
};
pub use convert::convert_shared_chat;
pub use index::{build_index, ResultIndex};
pub use latest::{latest_file, result_files_for};
pub use leaderboard::{
    entries_from_rows, page_count, paginate, rank_leaderboard, LeaderboardEntry, LeaderboardRow,
    LeaderboardSplit, DATASETS_SERVER_URL, DEFAULT_PAGE_SIZE,
};
pub use logs::{filter_lines, search, tail, LogService, LogSummary};
pub use transcript::{format_transcript, Segment};
