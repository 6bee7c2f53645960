#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{error, process};

mod app;
mod commands;
mod interact;

use commands::Commands;

use clap::{Args, Parser};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err}");
        process::exit(2);
    }
}

fn try_main() -> Result<(), Box<dyn error::Error>> {
    let Cli {
        command,
        global_opts: GlobalOpts { verbosity, quiet },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let message = command.execute()?;
    if !message.is_empty() {
        println!("{message}");
    }
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<(), Box<dyn error::Error>> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 1 } else { verbosity + 2 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookfinder")]
#[clap(about = "Search the Google Books catalog and browse the results in the terminal")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Only show errors, the results are still written to stdout.
    #[clap(short, long, global = true)]
    quiet: bool,
}
