//! material-visualizer CLI entry point.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;

use material_visualizer::{OutputFormat, RenderConfig, VisualizerError, render_file};

/// Render the shader graph of a material file to SVG.
#[derive(Parser, Debug)]
#[command(
    name = "material-visualizer",
    version = env!("MATERIAL_VISUALIZER_VERSION"),
    about = "Render the shader graph of a material file to SVG"
)]
struct Cli {
    /// Material file containing a <materialInstance> fragment
    input: Option<PathBuf>,

    /// Write output to this file instead of next to the input
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Space kept around the outermost nodes
    #[arg(long = "margin", default_value = "150")]
    margin: i32,

    /// On duplicate node names, link to the first declaration instead of failing
    #[arg(long = "allow-duplicate-names")]
    allow_duplicate_names: bool,

    /// Log pipeline steps to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let Some(input) = cli.input.as_deref() else {
        eprintln!("error: {}", VisualizerError::MissingArgument);
        process::exit(1);
    };

    let config = RenderConfig {
        margin: i64::from(cli.margin),
        allow_duplicate_names: cli.allow_duplicate_names,
        ..RenderConfig::default()
    };

    match render_file(input, cli.output.as_deref(), &config, cli.format) {
        Ok(path) => {
            println!("Output file path:");
            println!("{}", path.display());
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
