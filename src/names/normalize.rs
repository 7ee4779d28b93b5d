use regex::Regex;

/// Tunable thresholds for telling names from noise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRules {
    /// A bare address local part longer than this is kept as a name.
    pub local_part_len: usize,
    /// Names shorter than this are rejected.
    pub min_len: usize,
    /// All-uppercase names up to this length are rejected as initials.
    pub initials_len: usize,
    /// Names containing this many consecutive digits are rejected.
    pub digit_run: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        NameRules {
            local_part_len: 20,
            min_len: 2,
            initials_len: 2,
            digit_run: 3,
        }
    }
}

const HEADER_KEYWORDS: &[&str] = &["to", "from", "cc", "bcc"];

/// Turns one recipient fragment of a `To:` line into a display name.
pub struct NameNormalizer {
    rules: NameRules,
    brackets: Regex,
    title: Regex,
    noise: Regex,
}

impl NameNormalizer {
    pub fn new(rules: NameRules) -> Result<Self, regex::Error> {
        Ok(NameNormalizer {
            rules,
            brackets: Regex::new(r"<[^>]+>|\[[^\]]+\]")?,
            title: Regex::new(r"(?i)^(?:Mr\.|Mrs\.|Ms\.|Dr\.|Prof\.)\s+")?,
            noise: Regex::new(r"[^\w\s\-'.]")?,
        })
    }

    /// Returns the cleaned name, or `None` if the fragment holds no name.
    pub fn normalize(&self, fragment: &str) -> Option<String> {
        let name = self.brackets.replace_all(fragment, "");

        // An address only counts if its local part looks like a name.
        let name = match name.split_once('@') {
            Some((local, _)) => {
                let local = local.trim();
                if !local.contains(' ') && local.chars().count() <= self.rules.local_part_len {
                    return None;
                }
                local
            }
            None => &*name,
        };

        let name = name.trim().trim_matches('_').trim();
        let name = self.title.replace(name, "");
        let name = name.trim_end_matches(&['.', ',', ';'][..]);
        let name = self.noise.replace_all(name, "");
        let name = name.replace('_', " ");
        let mut name = name.split_whitespace().collect::<Vec<_>>().join(" ");

        // Undo the damage on short abbreviations such as "Jr.".
        if name.ends_with('.') && name.chars().count() <= 3 {
            name.truncate(name.trim_end_matches('.').len());
        }

        if self.is_acceptable(&name) {
            Some(name)
        } else {
            None
        }
    }

    fn is_acceptable(&self, name: &str) -> bool {
        let len = name.chars().count();
        if len < self.rules.min_len || name.contains('@') {
            return false;
        }
        if HEADER_KEYWORDS.iter().any(|kw| name.eq_ignore_ascii_case(kw)) {
            return false;
        }
        if !name.chars().any(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        let digits = name.chars().filter(|c| c.is_ascii_digit()).count();
        if digits * 2 > len {
            return false;
        }
        if longest_digit_run(name) >= self.rules.digit_run {
            return false;
        }
        if len <= self.rules.initials_len && is_upper(name) {
            return false;
        }
        !name
            .chars()
            .all(|c| c == '.' || c == '-' || c == '_' || c.is_whitespace())
    }
}

fn longest_digit_run(s: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in s.chars() {
        if c.is_ascii_digit() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Whether `s` has cased letters and all of them are uppercase.
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}
