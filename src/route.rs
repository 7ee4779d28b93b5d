use crate::classify::{Bucket, NO_DATE_DIR};
use crate::collect;
use crate::datetime::DateMatcher;
use crate::utils;
use crate::verify;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What happened to a single email.
#[derive(Debug)]
pub enum FileOutcome {
    /// Copied into a dated bucket, found by the given pattern.
    Dated { pattern: usize },
    /// Copied into the no_date bucket.
    Undated,
    /// Could not be read or copied; the email was skipped.
    Failed(io::Error),
}

pub struct Routed {
    pub source: PathBuf,
    pub outcome: FileOutcome,
}

fn get_file_name(path: &Path) -> io::Result<&OsStr> {
    path.file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))
}

fn copy_to(source: &Path, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let target = dir.join(get_file_name(source)?);
    if target.exists() {
        if !verify::same_content(source, &target)? {
            eprintln!(
                "Warning: replacing {:?} which has different content",
                target
            );
        }
        fs::remove_file(&target)?;
    }
    fs::copy(source, &target)?;
    let modified = fs::metadata(source)?.modified()?;
    fs::File::options()
        .write(true)
        .open(&target)?
        .set_modified(modified)
}

fn route_email(matcher: &DateMatcher, root: &Path, source: &Path) -> io::Result<FileOutcome> {
    let text = collect::read_email(source)?;
    let found = matcher.find_date(&text);
    let bucket = Bucket::from_date(found.map(|m| m.date));
    copy_to(source, &bucket.dir_in(root))?;
    Ok(match found {
        Some(m) => FileOutcome::Dated { pattern: m.pattern },
        None => FileOutcome::Undated,
    })
}

/// Empties the no_date bucket, which is rebuilt on every run.
pub fn reset_no_date(root: &Path) -> io::Result<()> {
    let dir = root.join(NO_DATE_DIR);
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)
}

/// Copies every email into its bucket under `root`, one at a time.
pub fn route_emails(
    matcher: &DateMatcher,
    root: &Path,
    emails: Vec<PathBuf>,
    quiet: bool,
) -> Vec<Routed> {
    let progress = utils::create_progress_bar(quiet, emails.len());
    let mut result = Vec::with_capacity(emails.len());
    for source in emails {
        let outcome = route_email(matcher, root, &source).unwrap_or_else(FileOutcome::Failed);
        if let FileOutcome::Failed(e) = &outcome {
            progress.suspend(|| eprintln!("Error processing {}: {}", source.display(), e));
        }
        result.push(Routed { source, outcome });
        progress.inc(1);
    }
    progress.finish_and_clear();
    result
}

/// Number of files anywhere under `dir`.
pub fn count_files(dir: &Path) -> io::Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(dir) {
        if !entry?.file_type().is_dir() {
            count += 1;
        }
    }
    Ok(count)
}
