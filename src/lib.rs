//! Duplicate Mover Library
//!
//! Hashes every file directly inside a folder and moves the files that share
//! content into `duplicates/<md5>/` beneath it.

pub mod core;
pub mod logging;
pub mod reporting;
pub mod scanner;
pub mod terminal;

pub use crate::core::pipeline;
pub use crate::reporting::report_writer;
pub use crate::scanner::{duplicate_detector, file_scanner};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::exit_status::ExitStatus;
    pub use crate::core::mover::{move_duplicates, move_record, MoveFailure, MovedFile};
    pub use crate::core::pipeline::{
        hash_files, process_files, run, RunConfig, RunSummary, DUPLICATES_DIR_NAME,
    };
    pub use crate::reporting::report_writer::{
        print_summary, summary_line, write_json_report, write_report, write_report_as,
        ReportFormat,
    };
    pub use crate::scanner::duplicate_detector::{
        compute_file_digest, digest_bytes, duplicate_groups, group_by_digest, to_file_record,
        DigestFormat, DuplicateGroup, FileRecord,
    };
    pub use crate::scanner::file_scanner::{collect_files, is_regular_file};
    pub use crate::terminal::{EnterPause, NoPause, Pause};
}
