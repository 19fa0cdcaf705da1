use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use dupe_mover_rs::logging::init_logging;
use dupe_mover_rs::prelude::*;

#[derive(Parser)]
#[command(name = "dupe_mover_rs")]
#[command(about = "Move files with identical content into duplicates/<md5>/ folders", long_about = None)]
struct Cli {
    /// Directory whose files are checked (not recursive)
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Name digest folders without leading zero nibbles, matching folders
    /// created by older versions of this tool
    #[arg(long)]
    trimmed_digest: bool,

    /// Wait for enter before exiting
    #[arg(long)]
    pause: bool,

    /// Run in batch mode (no progress bar)
    #[arg(long)]
    batch: bool,

    /// Write a report of moved files and failures
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Report file format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report_format: ReportFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        let mut config = RunConfig::new(&self.directory);
        if self.trimmed_digest {
            config.digest_format = DigestFormat::Trimmed;
        }
        config.show_progress = !self.batch;
        config
    }
}

fn execute(cli: &Cli) -> Result<ExitStatus> {
    let summary = run(&cli.run_config())?;
    print_summary(&summary);

    if let Some(ref report_path) = cli.report {
        write_report_as(report_path, &summary, cli.report_format)?;
        println!("Report saved to: {:?}", report_path);
    }

    Ok(ExitStatus::from_summary(&summary))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let status = match execute(&cli) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitStatus::Fatal
        }
    };

    let mut pause: Box<dyn Pause> = if cli.pause {
        Box::new(EnterPause::stdio())
    } else {
        Box::new(NoPause)
    };
    if let Err(e) = pause.wait() {
        log::warn!("Could not wait for enter: {}", e);
    }

    std::process::exit(status.code());
}
