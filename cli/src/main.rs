use clap::Parser;
use modeline_cli::{CliContext, CliError, commands, logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "modeline",
    version,
    about = "Compute refresh rate and Xorg modeline from a display timing file"
)]
struct Cli {
    /// Timing description in JSON, or `-` to read stdin
    #[arg(required_unless_present = "from_modeline")]
    timing_file: Option<PathBuf>,

    /// Recover the timing from modeline values instead of reading a file
    #[arg(long, value_name = "MODELINE", conflicts_with = "timing_file")]
    from_modeline: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also print fractional refresh rate and horizontal frequency
    #[arg(long)]
    precise: bool,

    /// Read preferences from this TOML file instead of the user config
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "calculation failed");
            eprintln!("error: {}", err.chain());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let ctx = CliContext::new(cli.config.as_deref())?.with_flags(cli.json, cli.precise);
    match (&cli.from_modeline, &cli.timing_file) {
        (Some(line), _) => commands::from_modeline(line, &ctx),
        (None, Some(path)) => commands::calculate(path, &ctx),
        (None, None) => unreachable!("clap requires a timing file or a modeline"),
    }
}
