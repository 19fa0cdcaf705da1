//! Process exit codes

use super::pipeline::RunSummary;

/// Exit codes for the mover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every file was hashed and every duplicate was moved
    Success = 0,
    /// At least one file could not be read or could not be moved
    PartialFailure = 1,
    /// The run could not proceed at all
    Fatal = 2,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_summary(summary: &RunSummary) -> Self {
        if summary.skipped() > 0 || summary.has_failures() {
            Self::PartialFailure
        } else {
            Self::Success
        }
    }
}
