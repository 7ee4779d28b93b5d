mod args;
mod classify;
mod collect;
mod datetime;
mod names;
mod organize;
mod route;
mod utils;
mod verify;

use args::{Args, Command};
use std::process;

fn main() {
    if let Err(e) = do_main(&Args::parse_args()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn do_main(args: &Args) -> anyhow::Result<()> {
    match &args.command {
        Command::Names(names_args) => names::extract_names(names_args, args.quiet),
        Command::Dates(dates_args) => organize::organize_by_date(dates_args, args.quiet),
    }
}
