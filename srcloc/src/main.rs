mod commands;
mod source;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::extract::ExtractArgs;
use eyre::{Result, WrapErr};
use source::SourceFile;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "srcloc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input file. Uses stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the source text covered by a location
    #[command(name = "extract")]
    Extract(ExtractArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("SRCLOC_LEVEL"))
        .with_writer(io::stderr)
        .init();

    color_eyre::install()?;

    let args = Cli::parse();

    let source = load_input(args.input)?;
    match args.command {
        Commands::Extract(args) => commands::extract::run(&source, &args, &mut io::stdout()),
    }?;

    Ok(())
}

fn load_input(input_path: Option<PathBuf>) -> Result<SourceFile> {
    let source = if let Some(input_path) = input_path {
        SourceFile::load_file(&input_path)
            .wrap_err_with(|| format!("failed to load {}", input_path.display()))?
    } else {
        SourceFile::load_reader("<stdin>".to_string(), io::stdin().lock())
            .wrap_err("failed to read stdin")?
    };

    Ok(source)
}
