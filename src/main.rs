use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;

use kjv_reader::{render_chapter, FixedWidth, TerminalWidth, WidthSource};

#[derive(Parser)]
#[command(name = "kjv")]
#[command(about = "Print a chapter of the KJV with inline verse numbers")]
struct Cli {
    /// Book abbreviation as written in the dataset (e.g. Gen, Exo, Mat)
    book: String,

    /// Chapter number
    chapter: String,

    /// Path to the pipe-delimited dataset
    #[arg(short, long, env = "KJV_DATA", default_value = "kjvdat.txt")]
    file: PathBuf,

    /// Terminal width to wrap for instead of detecting it
    #[arg(short, long)]
    width: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let width: Box<dyn WidthSource> = match cli.width {
        Some(cols) => Box::new(FixedWidth(cols)),
        None => Box::new(TerminalWidth),
    };

    let stdout = io::stdout();
    let outcome = render_chapter(
        &mut stdout.lock(),
        &cli.file,
        &cli.book,
        &cli.chapter,
        width.as_ref(),
    )?;
    debug!("Finished with {:?}", outcome);

    Ok(())
}
