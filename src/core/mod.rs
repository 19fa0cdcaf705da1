//! Core pipeline and file relocation

pub mod exit_status;
pub mod mover;
pub mod pipeline;

pub use exit_status::ExitStatus;
pub use mover::{move_duplicates, MoveFailure, MoveOutcome, MovedFile};
pub use pipeline::{hash_files, process_files, run, RunConfig, RunSummary, DUPLICATES_DIR_NAME};
