//! Console summary and report files

pub mod report_writer;

pub use report_writer::{
    print_summary, summary_line, write_json_report, write_report, write_report_as, ReportFormat,
};
