use std::path::PathBuf;

pub mod cli;
pub mod maidata;
pub mod renamer;
pub mod utils;

#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metadata file not found: {0}")]
    MetadataNotFound(PathBuf),
    #[error("No '{0}' field in maidata file")]
    KeyNotFound(String),
    #[error("Directory has no parent: {0}")]
    NoParent(PathBuf),
}

pub type Result<T> = std::result::Result<T, RenameError>;

// Re-exports for convenience
pub use maidata::reader::MaidataFile;
pub use renamer::directory::{DirectoryRenamer, RenameOptions, RenameOutcome, SkipReason};
pub use utils::file_ops::{DiskFs, FileSystem};
pub use utils::prompt::{Confirm, ConsolePrompt};
