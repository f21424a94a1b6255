#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::similar_names)]

mod args;
mod cli;
mod color;
mod commands;
mod config;
mod demo;
mod error;
mod font;
mod host;
mod png;
mod raster;
mod sink;
mod surface;
mod terminal;

#[cfg(test)]
mod test_helpers;

use crate::args::Cli;
use crate::cli::{Error, run_command};
use clap::Parser;
use crossterm::style::Stylize;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let res = run_command(&cli.command);
    if let Err(err) = res {
        eprintln!("{} {}", "💥 Error:".red(), Error(err));
        std::process::exit(1);
    }
}
