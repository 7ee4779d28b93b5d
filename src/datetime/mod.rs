mod parser;
mod patterns;

use self::patterns::{pattern_defs, DateShape, PatternDef};
use crate::args::PatternSet;
use chrono::{Datelike, NaiveDate};
use combine::Parser;
use regex::{Regex, RegexBuilder};
use std::ops::RangeInclusive;

/// Parses a date span captured by a pattern of the given shape. The whole
/// span has to be consumed and form a valid calendar date.
pub fn parse_date(shape: DateShape, s: &str) -> Option<NaiveDate> {
    let result = match shape {
        DateShape::Numeric => parser::numeric_date().parse(s),
        DateShape::Textual => parser::textual_date().parse(s),
    };
    match result {
        Ok((date, "")) => Some(date),
        _ => None,
    }
}

struct DatePattern {
    regex: Regex,
    shape: DateShape,
}

/// A date found in an email, with the index of the pattern that found it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateMatch {
    pub date: NaiveDate,
    pub pattern: usize,
}

/// Searches email text for the first acceptable date, trying an ordered list
/// of patterns.
pub struct DateMatcher {
    patterns: Vec<DatePattern>,
    labels: Vec<&'static str>,
    years: RangeInclusive<i32>,
}

impl DateMatcher {
    pub fn new(set: PatternSet, years: RangeInclusive<i32>) -> Result<Self, regex::Error> {
        let defs = pattern_defs(set);
        let mut patterns = Vec::with_capacity(defs.len());
        for PatternDef { regex, shape, .. } in defs {
            let regex = RegexBuilder::new(regex)
                .case_insensitive(true)
                .multi_line(true)
                .build()?;
            patterns.push(DatePattern {
                regex,
                shape: *shape,
            });
        }
        Ok(DateMatcher {
            patterns,
            labels: defs.iter().map(|def| def.label).collect(),
            years,
        })
    }

    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// For each pattern in order, only its first occurrence in `text` is
    /// considered. A match that is not a valid date, or whose year is out of
    /// range, falls through to the next pattern.
    pub fn find_date(&self, text: &str) -> Option<DateMatch> {
        self.patterns
            .iter()
            .enumerate()
            .find_map(|(index, pattern)| {
                let span = pattern.regex.captures(text)?.name("date")?;
                let date = parse_date(pattern.shape, span.as_str())?;
                if self.years.contains(&date.year()) {
                    Some(DateMatch {
                        date,
                        pattern: index,
                    })
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(set: PatternSet) -> DateMatcher {
        DateMatcher::new(set, 2000..=2025).unwrap()
    }

    fn find(text: &str) -> Option<NaiveDate> {
        matcher(PatternSet::Extended).find_date(text).map(|m| m.date)
    }

    fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(matcher(PatternSet::Basic).labels().len(), 4);
        assert_eq!(matcher(PatternSet::Extended).labels().len(), 15);
    }

    #[test]
    fn test_found() {
        let testcases = [
            ("Sent: 4/5/2018 10:16:55 PM", ymd(2018, 4, 5)),
            ("Sent: 4/5/2018", ymd(2018, 4, 5)),
            ("Sent 9/28/2012 2:41:02 PM", ymd(2012, 9, 28)),
            ("Date: 07/24/2008 11:49 AM", ymd(2008, 7, 24)),
            ("Date: 07/24/2008", ymd(2008, 7, 24)),
            ("Date: Fri, Mar 18, 2016 at 11:39 AM", ymd(2016, 3, 18)),
            ("Date: Thursday, January 28 2010 11:21 AM", ymd(2010, 1, 28)),
            ("Date: April 27, 2016 at 3:47:49 PM EDT", ymd(2016, 4, 27)),
            ("Sent: Friday, March 18, 2016 11:41 AM", ymd(2016, 3, 18)),
            ("Thursday, July 24, 2008 11:51:14 AM", ymd(2008, 7, 24)),
            ("Sunday, April 3 2011 03:49 PM", ymd(2011, 4, 3)),
            ("Dear all,\nMay 27, 2008\n", ymd(2008, 5, 27)),
            ("Printed\n12/22/2018 8:21:20 PM\n", ymd(2018, 12, 22)),
            ("Printed\n12/22/2018\n", ymd(2018, 12, 22)),
            ("FAX 05/27/2008 12:18 P.001", ymd(2008, 5, 27)),
            ("sent: 4/5/2018", ymd(2018, 4, 5)),
            ("DATE: APRIL 27, 2016", ymd(2016, 4, 27)),
        ];
        for (text, expected) in testcases.iter() {
            assert_eq!(find(text), *expected, "text {:?}", text);
        }
    }

    #[test]
    fn test_not_found() {
        let testcases = [
            "",
            "Subject: lunch on 4/5 at noon",
            "Sent: 1/2/2030 9:00 AM",
            "Date: April 31, 2016",
            "We met in May 27, 2008.",
            "Sent: 13/45/2018 10:00",
        ];
        for text in testcases.iter() {
            assert_eq!(find(text), None, "text {:?}", text);
        }
    }

    #[test]
    fn test_priority_order() {
        let text = "Date: April 27, 2016 at 3:47:49 PM EDT\nSent: 4/5/2018 10:16:55 PM\n";
        let found = matcher(PatternSet::Extended).find_date(text).unwrap();
        assert_eq!(Some(found.date), ymd(2018, 4, 5));
        assert_eq!(found.pattern, 0);
    }

    #[test]
    fn test_first_occurrence_per_pattern() {
        let text = "Sent: 4/5/2018 10:16\nSent: 6/7/2019 11:00\n";
        assert_eq!(find(text), ymd(2018, 4, 5));
    }

    #[test]
    fn test_out_of_range_falls_through() {
        // The first pattern finds 2030 and is rejected, the fax stamp is next.
        let text = "Sent: 1/2/2030 9:00 AM\nFAX 05/27/2008 12:18\n";
        let found = matcher(PatternSet::Extended).find_date(text).unwrap();
        assert_eq!(Some(found.date), ymd(2008, 5, 27));
        assert_eq!(
            matcher(PatternSet::Extended).labels()[found.pattern],
            "mm/dd/yyyy hh:mm"
        );
    }

    #[test]
    fn test_invalid_date_falls_through() {
        let text = "Date: April 31, 2016\nThursday, July 24, 2008 11:51:14 AM\n";
        assert_eq!(find(text), ymd(2008, 7, 24));
    }

    #[test]
    fn test_year_range() {
        let matcher = DateMatcher::new(PatternSet::Extended, 1990..=2030).unwrap();
        let found = matcher.find_date("Sent: 1/2/2030 9:00 AM").unwrap();
        assert_eq!(Some(found.date), ymd(2030, 1, 2));
        let found = matcher.find_date("Sent: 1/2/1995 9:00 AM").unwrap();
        assert_eq!(Some(found.date), ymd(1995, 1, 2));
        assert_eq!(matcher.find_date("Sent: 1/2/1989 9:00 AM"), None);
    }

    #[test]
    fn test_basic_set() {
        let matcher = matcher(PatternSet::Basic);
        let found = matcher.find_date("Sent: 4/5/2018 10:16:55 PM").unwrap();
        assert_eq!(Some(found.date), ymd(2018, 4, 5));
        let found = matcher.find_date("Date: Fri, Mar 18, 2016 at 11:39 AM").unwrap();
        assert_eq!(Some(found.date), ymd(2016, 3, 18));
        assert_eq!(matcher.find_date("Date: 07/24/2008 11:49 AM"), None);
        assert_eq!(matcher.find_date("Thursday, July 24, 2008 11:51:14 AM"), None);
    }

    #[test]
    fn test_parse_date_whole_span() {
        assert_eq!(parse_date(DateShape::Numeric, "4/5/2018"), ymd(2018, 4, 5));
        assert_eq!(parse_date(DateShape::Numeric, "4/5/2018 "), None);
        assert_eq!(parse_date(DateShape::Textual, "May 27, 2008"), ymd(2008, 5, 27));
        assert_eq!(parse_date(DateShape::Textual, "4/5/2018"), None);
    }
}
