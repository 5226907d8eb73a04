//! colour - colour science command line tools
//!
//! TM-30-18 reports from CIE 2017 colorimetry, DIN99 colour differences and
//! `.cube` LUT inspection / conversion.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "colour")]
#[command(author, version, about = "Colour science command line tools")]
#[command(long_about = "
Colour rendition indexes, colour differences and LUT file tools.

Examples:
  colour tm30 fl2_cie2017.json                 # TM-30-18 report
  colour tm30 fl2_cie2017.json --json -o out.json
  colour delta-e --lab1 60.2574,-34.0099,36.2677 --lab2 60.4626,-34.1751,39.4387
  colour delta-e --pairs samples.json --textiles
  colour lut info grade.cube
  colour lut convert grade.cube clean.cube --decimals 6
  colour lut apply grade.cube --rgb 0.18,0.18,0.18
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// ANSI/IES TM-30-18 fidelity and gamut report
    Tm30(Tm30Args),

    /// DIN99 colour difference
    #[command(name = "delta-e", visible_alias = "de")]
    DeltaE(DeltaEArgs),

    /// .cube LUT tools
    #[command(subcommand)]
    Lut(LutCommands),
}

#[derive(Args)]
struct Tm30Args {
    /// JSON file with the test SPD and its CIE 2017 colorimetry
    input: PathBuf,

    /// Only report the colour fidelity index R_f
    #[arg(long)]
    fidelity_only: bool,

    /// Print the full specification as JSON
    #[arg(long)]
    json: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct DeltaEArgs {
    /// First CIE L*a*b* value (L,a,b)
    #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true, required_unless_present = "pairs")]
    lab1: Vec<f64>,

    /// Second CIE L*a*b* value (L,a,b)
    #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true, required_unless_present = "pairs")]
    lab2: Vec<f64>,

    /// JSON file with [[lab1, lab2], ...] pairs
    #[arg(long, conflicts_with_all = ["lab1", "lab2"])]
    pairs: Option<PathBuf>,

    /// Use textiles factors (k_E = 2, k_CH = 0.5)
    #[arg(long)]
    textiles: bool,

    /// Scale of the input values
    #[arg(long, value_enum, default_value_t = Scale::Reference)]
    scale: Scale,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scale {
    /// L* in [0, 100]
    Reference,
    /// L* in [0, 1]
    One,
}

#[derive(Subcommand)]
enum LutCommands {
    /// Show LUT information
    Info(LutInfoArgs),

    /// Read a LUT and write it back in canonical form
    Convert(LutConvertArgs),

    /// Apply a LUT to an RGB value
    Apply(LutApplyArgs),
}

#[derive(Args)]
struct LutInfoArgs {
    /// Input .cube file
    input: PathBuf,
}

#[derive(Args)]
struct LutConvertArgs {
    /// Input .cube file
    input: PathBuf,

    /// Output .cube file
    output: PathBuf,

    /// Decimals per value
    #[arg(short, long, default_value_t = colour_lut::cube::DEFAULT_DECIMALS)]
    decimals: usize,

    /// Replace the LUT title
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
struct LutApplyArgs {
    /// Input .cube file
    input: PathBuf,

    /// RGB value (r,g,b)
    #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true)]
    rgb: Vec<f64>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "colour=warn",
        1 => "colour=info",
        _ => "colour=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Tm30(args) => commands::tm30::run(args, cli.verbose),
        Commands::DeltaE(args) => commands::delta_e::run(args, cli.verbose),
        Commands::Lut(LutCommands::Info(args)) => commands::lut::run_info(args),
        Commands::Lut(LutCommands::Convert(args)) => commands::lut::run_convert(args, cli.verbose),
        Commands::Lut(LutCommands::Apply(args)) => commands::lut::run_apply(args),
    }
}
