use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

pub const NO_DATE_DIR: &str = "no_date";

/// Where an email ends up below the output root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    Dated(NaiveDate),
    NoDate,
}

impl Bucket {
    pub fn from_date(date: Option<NaiveDate>) -> Self {
        date.map_or(Bucket::NoDate, Bucket::Dated)
    }

    /// `year/month/day` with zero-padded month and day, or `no_date`.
    pub fn relative_dir(&self) -> PathBuf {
        match self {
            Bucket::Dated(date) => [
                date.year().to_string(),
                format!("{:02}", date.month()),
                format!("{:02}", date.day()),
            ]
            .iter()
            .collect(),
            Bucket::NoDate => PathBuf::from(NO_DATE_DIR),
        }
    }

    pub fn dir_in(&self, root: &Path) -> PathBuf {
        root.join(self.relative_dir())
    }
}
