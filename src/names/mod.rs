mod emit;
mod index;
mod normalize;

pub use self::index::NameIndex;
pub use self::normalize::{NameNormalizer, NameRules};

use crate::args::NamesArgs;
use crate::collect;
use crate::utils;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

impl NamesArgs {
    pub fn rules(&self) -> NameRules {
        NameRules {
            local_part_len: self.local_part_len,
            min_len: self.min_len,
            initials_len: self.initials_len,
            digit_run: self.digit_run,
        }
    }
}

/// Reads every email and indexes its recipients. An email that cannot be
/// read is reported and skipped; the second value counts those.
fn index_emails(
    normalizer: &NameNormalizer,
    paths: &[PathBuf],
    quiet: bool,
) -> (NameIndex, usize) {
    let mut index = NameIndex::new();
    let mut failed = 0;
    let progress = utils::create_progress_bar(quiet, paths.len());
    for path in paths {
        match collect::read_email(path) {
            Ok(text) => index.scan(normalizer, &collect::email_name(path), &text),
            Err(e) => {
                progress.suspend(|| eprintln!("Error processing {}: {}", path.display(), e));
                failed += 1;
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    (index, failed)
}

pub fn extract_names(args: &NamesArgs, quiet: bool) -> anyhow::Result<()> {
    eprintln!("Listing emails...");
    let list = collect::list_emails_recursive(&args.email_dir)
        .with_context(|| format!("failed to list {}", args.email_dir.display()))?;
    println!("Processing {} email files...", list.len());

    eprintln!("Scanning recipients...");
    let normalizer = NameNormalizer::new(args.rules())?;
    let (index, failed) = index_emails(&normalizer, &list, quiet);
    if failed > 0 {
        println!("Failed to read {} files", failed);
    }
    println!("Found {} unique names", index.len());

    eprintln!("Writing name lists...");
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;
    let summary = emit::write_records(&args.output_dir, &index)?;
    if summary.failed > 0 {
        println!("Failed to write {} name files", summary.failed);
    }
    println!(
        "Created {} name files in {}",
        summary.written,
        args.output_dir.display()
    );

    emit::print_summary(&index, args.top);
    Ok(())
}
