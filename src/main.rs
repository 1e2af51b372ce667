//! Command line interface: rank the rows of a CSV file into Pareto fronts.
//!
//! Usage:
//!     u-pareto -i runs.csv -c accuracy -c latency:min -o ranked.csv
//!     u-pareto -i runs.csv -c score label:text > ranked.csv

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use u_pareto::front::SortConfig;
use u_pareto::table::{rank_csv_file, ColumnSpec, TableConfig};
use u_pareto::{Error, Result};

/// Non-dominated sort of CSV rows
#[derive(Parser, Debug)]
#[command(name = "u-pareto")]
#[command(version)]
#[command(
    about = "Appends a Pareto front index to every CSV row and orders rows by front",
    long_about = None
)]
struct Args {
    /// Input CSV file (first row is the header)
    #[arg(short, long)]
    input_file: PathBuf,

    /// Output CSV file; stdout when omitted
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Columns to optimize over, as NAME[:num|:text][:max|:min]
    #[arg(short, long, num_args = 1.., required = true)]
    columns: Vec<ColumnSpec>,

    /// Name of the appended front column
    #[arg(long, default_value = "front")]
    front_column: String,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Run the domination pass on the calling thread only
    #[arg(long)]
    serial: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn table_config(&self) -> Result<TableConfig> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                Error::InvalidConfig(format!("delimiter {:?} is not ASCII", self.delimiter))
            })?;

        let sort = if self.serial {
            SortConfig::serial()
        } else {
            SortConfig::default()
        };

        Ok(TableConfig::new(self.columns.clone())
            .with_front_column(self.front_column.clone())
            .with_delimiter(delimiter)
            .with_sort(sort))
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.table_config()?;
    let summary = rank_csv_file(&args.input_file, args.output_file.as_deref(), &config)?;
    tracing::info!(
        input = %args.input_file.display(),
        rows = summary.rows,
        front_sizes = ?summary.front_sizes,
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
