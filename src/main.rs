mod commands;
mod config;
mod image;
mod options;
mod palette;
mod worksheet;

use std::process;

use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:?}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Pack(pack_options) => commands::pack(options.global, pack_options)?,
        Subcommand::Export(export_options) => commands::export(options.global, export_options)?,
        Subcommand::Batch(batch_options) => commands::batch(options.global, batch_options)?,
    }

    Ok(())
}
