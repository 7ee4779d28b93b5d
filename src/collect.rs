use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const EMAIL_SUFFIX: &str = ".txt";

/// Directory holding the date hierarchy, which must not be scanned again.
pub const DATE_DIR_NAME: &str = "byDate";
/// Directory holding the per-name lists, which must not be scanned again.
pub const NAME_DIR_NAME: &str = "nameByFreq";

fn is_email(path: &Path) -> bool {
    path.file_name()
        .map_or(false, |name| name.to_string_lossy().ends_with(EMAIL_SUFFIX))
}

fn is_output_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && (entry.file_name() == DATE_DIR_NAME || entry.file_name() == NAME_DIR_NAME)
}

/// Lists email files directly inside `dir`, sorted by path. Symbolic links
/// to files are listed too.
pub fn list_emails(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_email(&path) && fs::metadata(&path).map_or(false, |m| m.is_file()) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Lists email files anywhere under `dir`, following links and skipping
/// outputs we produced earlier, sorted by path.
pub fn list_emails_recursive(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    let walker = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_output_dir(entry));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                eprintln!("Warning: skipping {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if entry.file_type().is_file() && is_email(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// The name an email is known by in reports and output lists.
pub fn email_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}

fn normalize_newlines(text: Cow<'_, str>) -> Cow<'_, str> {
    if !text.contains('\r') {
        return text;
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Reads an email as text. Invalid UTF-8 is replaced rather than rejected,
/// and all line endings become `\n`.
pub fn read_email(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let text = normalize_newlines(String::from_utf8_lossy(&bytes));
    Ok(text.into_owned())
}
