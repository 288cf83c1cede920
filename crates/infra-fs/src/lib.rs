// Evalboard Infrastructure - Filesystem Adapter
// Implements: ResultStore, LogStore, offline index/result writers

mod io;
mod log_store;
mod result_store;
mod writer;

pub use log_store::FsLogStore;
pub use result_store::FsResultStore;
pub use writer::{write_index, write_result};
