use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use spechtlab_report::builder::{parse_report_date, DEFAULT_OUTPUT_FILE, DEFAULT_TITLE};
use spechtlab_report::prompt::Prompter;
use spechtlab_report::{ReportBuilder, ReportError};

/// Collects measurements on the terminal and renders them as a one-page PDF report.
///
/// Logging is controlled through the `SPECHTLAB_LOG` environment variable and is written to
/// stderr, e.g. `SPECHTLAB_LOG=debug spechtlab`.
#[derive(Parser)]
#[command(author, version, about = "Measurement report generator")]
struct Cli {
    /// File the PDF report is written to.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Title printed at the top of the page.
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Report date as DD-MM-YYYY. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Print the page layout instead of writing a PDF.
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("SPECHTLAB_LOG", "warn"))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ReportError> {
    let mut builder = ReportBuilder::new()
        .with_title(cli.title)
        .with_output(cli.output);
    if let Some(date) = cli.date.as_deref() {
        builder = builder.with_date(parse_report_date(date)?);
    }
    let config = builder.build();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let session = prompter.collect_session()?;

    if cli.dry_run {
        for command in config.dry_run(&session)? {
            println!("{}", command);
        }
        return Ok(());
    }

    let report = config.write_pdf(&session)?;
    println!(
        "Generated {} ({} bytes)",
        report.path.display(),
        report.bytes
    );
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
