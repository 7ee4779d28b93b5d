use crate::args::DatesArgs;
use crate::classify::Bucket;
use crate::collect;
use crate::datetime::DateMatcher;
use crate::route::{self, FileOutcome, Routed};
use crate::utils;
use anyhow::{bail, Context};

const SAMPLE_LINES: usize = 10;
const SAMPLE_WIDTH: usize = 80;

pub fn organize_by_date(args: &DatesArgs, quiet: bool) -> anyhow::Result<()> {
    if args.min_year > args.max_year {
        bail!(
            "--min-year {} is after --max-year {}",
            args.min_year,
            args.max_year
        );
    }
    let matcher = DateMatcher::new(args.patterns, args.min_year..=args.max_year)?;

    eprintln!("Listing emails...");
    let list = collect::list_emails(&args.email_dir)
        .with_context(|| format!("failed to list {}", args.email_dir.display()))?;
    let before_count = list.len();
    println!("Total email files: {}", before_count);

    route::reset_no_date(&args.output_dir)
        .with_context(|| format!("failed to prepare {}", args.output_dir.display()))?;

    eprintln!("Copying emails...");
    let routed = route::route_emails(&matcher, &args.output_dir, list, quiet);

    let after_count = route::count_files(&args.output_dir)
        .with_context(|| format!("failed to count {}", args.output_dir.display()))?;
    print_report(args, &matcher, &routed, before_count, after_count);
    Ok(())
}

fn print_report(
    args: &DatesArgs,
    matcher: &DateMatcher,
    routed: &[Routed],
    before_count: usize,
    after_count: usize,
) {
    let mut per_pattern = vec![0; matcher.labels().len()];
    let mut undated = vec![];
    let mut failed = 0;
    for item in routed {
        match item.outcome {
            FileOutcome::Dated { pattern } => per_pattern[pattern] += 1,
            FileOutcome::Undated => undated.push(item),
            FileOutcome::Failed(_) => failed += 1,
        }
    }
    let dated: usize = per_pattern.iter().sum();

    println!();
    println!("=== Results ===");
    println!("Files with dates: {}", dated);
    println!("Files without dates: {}", undated.len());
    if failed > 0 {
        println!("Files skipped after errors: {}", failed);
    }
    println!("Before count: {}", before_count);
    println!("After count: {}", after_count);
    println!("Match: {}", before_count == after_count);

    if dated > 0 {
        println!();
        println!("Dates found by pattern:");
        for (label, count) in matcher.labels().iter().zip(per_pattern) {
            if count > 0 {
                println!("  {}: {}", label, count);
            }
        }
    }

    if !undated.is_empty() && args.samples > 0 {
        println!();
        println!("First {} files without dates:", args.samples);
        let no_date_dir = Bucket::NoDate.dir_in(&args.output_dir);
        for item in undated.into_iter().take(args.samples) {
            let name = collect::email_name(&item.source);
            println!("  {}", name);
            if let Ok(text) = collect::read_email(&no_date_dir.join(&*name)) {
                println!("    First {} lines:", SAMPLE_LINES);
                for line in text.lines().take(SAMPLE_LINES) {
                    println!("      {}", utils::truncate_chars(line.trim(), SAMPLE_WIDTH));
                }
            }
        }
    }
}
