use chrono::NaiveDate;
use combine::{
    error::StringStreamError,
    many1, optional,
    parser::char::{char, digit, letter, spaces},
    Parser,
};

/// `month/day/year`, e.g. `4/5/2018` or `07/24/2008`.
pub fn numeric_date<'a>() -> impl Parser<&'a str, Output = NaiveDate> {
    (
        number(1, 2), // month
        char('/'),
        number(1, 2), // day
        char('/'),
        number(4, 4), // year
    )
        .and_then(|(month, _, day, _, year)| calendar_date(year, month, day))
}

/// `Month day, year` with an optional comma, e.g. `March 18, 2016` or
/// `Jan 28 2010`.
pub fn textual_date<'a>() -> impl Parser<&'a str, Output = NaiveDate> {
    (
        month(),
        spaces(),
        number(1, 2), // day
        optional(char(',')),
        spaces(),
        number(4, 4), // year
    )
        .and_then(|(month, _, day, _, _, year)| calendar_date(year, month, day))
}

fn calendar_date(year: u32, month: u32, day: u32) -> Result<NaiveDate, StringStreamError> {
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(StringStreamError::UnexpectedParse)
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Full or three-letter month name, in any case.
fn month_number(name: &str) -> Option<u32> {
    let name = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|full| name == *full || (name.len() == 3 && full.starts_with(&name)))
        .map(|index| index as u32 + 1)
}

fn month<'a>() -> impl Parser<&'a str, Output = u32> {
    many1::<String, _, _>(letter())
        .and_then(|name| month_number(&name).ok_or(StringStreamError::UnexpectedParse))
}

fn number<'a>(min_digits: usize, max_digits: usize) -> impl Parser<&'a str, Output = u32> {
    many1::<String, _, _>(digit()).and_then(move |s| {
        if s.len() < min_digits || s.len() > max_digits {
            return Err(StringStreamError::UnexpectedParse);
        }
        s.parse::<u32>().map_err(|_| StringStreamError::UnexpectedParse)
    })
}
