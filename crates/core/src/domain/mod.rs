// Domain Layer - Result files, transcripts, log files

pub mod error;
pub mod log_file;
pub mod model_name;
pub mod result_file;
pub mod run;
pub mod timestamp;

// Re-exports
pub use error::DomainError;
pub use log_file::{LogFileEntry, UNKNOWN_DATE};
pub use model_name::{model_family, normalize_model_name};
pub use result_file::ResultFileName;
pub use run::{ModelRun, PromptExchange, ResultDocument};
pub use timestamp::RunTimestamp;
