use super::index::{NameEntry, NameIndex};
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Makes a name usable as a file name.
pub struct SafeName {
    unsafe_chars: Regex,
}

impl SafeName {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(SafeName {
            unsafe_chars: Regex::new(r"[^\w\s\-.]")?,
        })
    }

    pub fn convert(&self, name: &str) -> String {
        self.unsafe_chars
            .replace_all(name, "")
            .replace(&[' ', '/', '\\'][..], "_")
    }

    /// The file a name's list is written to; the count comes first so that
    /// listings sort by frequency.
    pub fn record_name(&self, name: &str, count: usize) -> String {
        format!("({}) {}", count, self.convert(name))
    }
}

fn write_record(path: &Path, entry: &NameEntry) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for file in entry.files.iter() {
        writeln!(writer, "{}", file)?;
    }
    writer.flush()
}

/// How many lists `write_records` wrote, and how many it could not write.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub failed: usize,
}

/// Writes one list per name into `dir`. A list that cannot be written is
/// reported and skipped.
pub fn write_records(dir: &Path, index: &NameIndex) -> anyhow::Result<WriteSummary> {
    let safe_name = SafeName::new()?;
    let mut seen = HashSet::new();
    let mut written = HashSet::new();
    let mut failed = 0;
    for (name, entry) in index.by_frequency() {
        let record_name = safe_name.record_name(name, entry.count);
        if !seen.insert(record_name.clone()) {
            eprintln!(
                "Warning: {:?} replaces an earlier list named {:?}",
                name, record_name
            );
        }
        let path = dir.join(&record_name);
        match write_record(&path, entry) {
            Ok(()) => {
                written.insert(record_name);
            }
            Err(e) => {
                eprintln!("Error writing {}: {}", path.display(), e);
                failed += 1;
            }
        }
    }
    Ok(WriteSummary {
        written: written.len(),
        failed,
    })
}

pub fn print_summary(index: &NameIndex, top: usize) {
    println!("Top {} names by frequency:", top);
    for (name, entry) in index.by_frequency().into_iter().take(top) {
        println!(
            "  {}: {} occurrences in {} files",
            name,
            entry.count,
            entry.files.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_safe_name() {
        let safe_name = SafeName::new().unwrap();
        assert_eq!(safe_name.convert("John Smith"), "John_Smith");
        assert_eq!(safe_name.convert("O'Brien"), "OBrien");
        assert_eq!(safe_name.convert("J. R. Smith-Jones"), "J._R._Smith-Jones");
        assert_eq!(safe_name.convert("a/b\\c"), "abc");
        assert_eq!(safe_name.record_name("John Smith", 12), "(12) John_Smith");
    }

    #[test]
    fn test_write_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = NameIndex::new();
        index.insert("John Smith".to_string(), "b.txt");
        index.insert("John Smith".to_string(), "a.txt");
        index.insert("John Smith".to_string(), "b.txt");
        index.insert("Jane Doe".to_string(), "c.txt");

        let summary = write_records(dir.path(), &index).unwrap();
        assert_eq!(summary, WriteSummary { written: 2, failed: 0 });
        let john = fs::read_to_string(dir.path().join("(3) John_Smith")).unwrap();
        assert_eq!(john, "a.txt\nb.txt\n");
        let jane = fs::read_to_string(dir.path().join("(1) Jane_Doe")).unwrap();
        assert_eq!(jane, "c.txt\n");
    }

    #[test]
    fn test_write_records_colliding_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = NameIndex::new();
        index.insert("O'Brien".to_string(), "a.txt");
        index.insert("OBrien".to_string(), "b.txt");

        assert_eq!(write_records(dir.path(), &index).unwrap().written, 1);
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
        // Equal counts are ordered by name, so "OBrien" is written last.
        let content = fs::read_to_string(dir.path().join("(1) OBrien")).unwrap();
        assert_eq!(content, "b.txt\n");
    }

    #[test]
    fn test_write_records_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = NameIndex::new();
        // Too long for a file name on common file systems.
        let long_name = "Alexander".repeat(34);
        index.insert(long_name.clone(), "a.txt");
        index.insert(long_name, "a.txt");
        index.insert("John Smith".to_string(), "b.txt");

        let summary = write_records(dir.path(), &index).unwrap();
        assert_eq!(summary, WriteSummary { written: 1, failed: 1 });
        let john = fs::read_to_string(dir.path().join("(1) John_Smith")).unwrap();
        assert_eq!(john, "b.txt\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
