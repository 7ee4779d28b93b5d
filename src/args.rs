use crate::collect;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "mailsift")]
#[clap(author, version, about)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
    /// Suppress any progress output if set.
    #[clap(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Group email files by the recipient names found in their To: lines.
    Names(NamesArgs),
    /// Copy email files into a year/month/day hierarchy by header date.
    Dates(DatesArgs),
}

#[derive(Debug, clap::Args)]
pub struct NamesArgs {
    /// Directory of exported emails, scanned recursively.
    pub email_dir: PathBuf,
    /// Where the per-name lists go, which is email_dir/nameByFreq by default.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// The directory the per-name lists are actually written to.
    #[clap(skip)]
    pub output_dir: PathBuf,
    /// Number of names shown in the frequency table.
    #[clap(long, default_value_t = 20)]
    pub top: usize,
    /// A bare address local part longer than this is kept as a name.
    #[clap(long, default_value_t = 20)]
    pub local_part_len: usize,
    /// Names shorter than this are dropped.
    #[clap(long, default_value_t = 2)]
    pub min_len: usize,
    /// All-uppercase names up to this length are dropped as initials.
    #[clap(long, default_value_t = 2)]
    pub initials_len: usize,
    /// Names with a run of this many digits are dropped.
    #[clap(long, default_value_t = 3)]
    pub digit_run: usize,
}

#[derive(Debug, clap::Args)]
pub struct DatesArgs {
    /// Directory of exported emails. Only files directly inside are used.
    pub email_dir: PathBuf,
    /// Root of the date hierarchy, which is email_dir/byDate by default.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// The directory the hierarchy is actually built in.
    #[clap(skip)]
    pub output_dir: PathBuf,
    /// Which list of date patterns to search with.
    #[clap(long, value_enum, default_value_t = PatternSet::Extended)]
    pub patterns: PatternSet,
    /// Dates before this year are ignored.
    #[clap(long, default_value_t = 2000)]
    pub min_year: i32,
    /// Dates after this year are ignored.
    #[clap(long, default_value_t = 2025)]
    pub max_year: i32,
    /// Number of undated files shown in the report.
    #[clap(long, default_value_t = 10)]
    pub samples: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PatternSet {
    /// Sent: and Date: headers only.
    Basic,
    /// Also weekday lines, standalone dates and fax stamps.
    Extended,
}

impl Args {
    pub fn parse_args() -> Self {
        let mut result: Self = Self::parse();
        match &mut result.command {
            Command::Names(args) => {
                args.output_dir = args
                    .output
                    .clone()
                    .unwrap_or_else(|| args.email_dir.join(collect::NAME_DIR_NAME));
            }
            Command::Dates(args) => {
                args.output_dir = args
                    .output
                    .clone()
                    .unwrap_or_else(|| args.email_dir.join(collect::DATE_DIR_NAME));
            }
        }
        result
    }
}
