use indicatif::ProgressBar;

pub fn create_progress_bar(quiet: bool, len: usize) -> ProgressBar {
    if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(len as u64)
    }
}

/// Returns at most `max` leading characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((pos, _)) => &s[..pos],
        None => s,
    }
}
