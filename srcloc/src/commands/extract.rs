use std::io::Write;

use clap::Args;
use colored::control::ShouldColorize;
use colored::Colorize;
use eyre::{Result, WrapErr};
use srcloc_text::SourceLocation;

use crate::source::SourceFile;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Byte offset where the location starts
    #[arg(short, long)]
    start: usize,

    /// Byte offset just past the end of the location
    #[arg(short, long)]
    end: Option<usize>,

    /// Print the location as `line:column-line:column` before the text
    #[arg(short, long)]
    location: bool,

    /// Disable colour output
    #[arg(long)]
    no_color: bool,
}

pub fn run<W: Write>(source: &SourceFile, args: &ExtractArgs, out: &mut W) -> Result<()> {
    let location = SourceLocation::new(
        source.position_at(args.start),
        args.end.map(|end| source.position_at(end)),
    );

    let text = location
        .extract_text(&source.src)
        .wrap_err_with(|| format!("cannot extract {} from {}", location, source.filename))?;

    if args.location {
        let header = format!("{}:{}", source.filename, location);
        let use_color = !args.no_color && ShouldColorize::from_env().should_colorize();
        if use_color {
            writeln!(out, "{}", header.bright_black())?;
        } else {
            writeln!(out, "{}", header)?;
        }
    }

    writeln!(out, "{}", text)?;
    Ok(())
}
