use crate::args::PatternSet;

/// How the `date` capture of a pattern is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateShape {
    /// `month/day/year`
    Numeric,
    /// `Month day, year`
    Textual,
}

pub struct PatternDef {
    pub label: &'static str,
    pub regex: &'static str,
    pub shape: DateShape,
}

macro_rules! patterns {
    ($($name:ident: $shape:ident, $label:expr, $regex:expr;)+) => {
        $(
            const $name: PatternDef = PatternDef {
                label: $label,
                regex: $regex,
                shape: DateShape::$shape,
            };
        )+
    };
}

patterns! {
    SENT_NUMERIC_TIME: Numeric, "Sent: m/d/yyyy h:mm",
        r"Sent:\s*(?P<date>\d{1,2}/\d{1,2}/\d{4})\s+\d+:\d+";
    SENT_NUMERIC: Numeric, "Sent: m/d/yyyy",
        r"Sent:\s*(?P<date>\d{1,2}/\d{1,2}/\d{4})";
    SENT_NO_COLON_NUMERIC_TIME: Numeric, "Sent m/d/yyyy h:mm",
        r"Sent\s+(?P<date>\d{1,2}/\d{1,2}/\d{4})\s+\d+:\d+";
    DATE_NUMERIC_TIME: Numeric, "Date: m/d/yyyy h:mm",
        r"Date:\s*(?P<date>\d{1,2}/\d{1,2}/\d{4})\s+\d+:\d+";
    DATE_NUMERIC: Numeric, "Date: m/d/yyyy",
        r"Date:\s*(?P<date>\d{1,2}/\d{1,2}/\d{4})";
    DATE_WEEKDAY_TEXTUAL: Textual, "Date: Weekday, Month d, yyyy",
        r"Date:\s*[A-Za-z]+,\s*(?P<date>[A-Za-z]+\s+\d{1,2},\s*\d{4})";
    DATE_WEEKDAY_TEXTUAL_NO_COMMA: Textual, "Date: Weekday, Month d yyyy",
        r"Date:\s*[A-Za-z]+day,\s*(?P<date>[A-Za-z]+\s+\d{1,2}\s+\d{4})";
    DATE_TEXTUAL: Textual, "Date: Month d, yyyy",
        r"Date:\s*(?P<date>[A-Za-z]+\s+\d{1,2},\s*\d{4})";
    SENT_WEEKDAY_TEXTUAL: Textual, "Sent: Weekday, Month d, yyyy",
        r"Sent:\s*[A-Za-z]+,\s*(?P<date>[A-Za-z]+\s+\d{1,2},\s*\d{4})";
    WEEKDAY_TEXTUAL_TIME: Textual, "Weekday, Month d, yyyy h:mm",
        r"[A-Za-z]+day,\s*(?P<date>[A-Za-z]+\s+\d{1,2},\s*\d{4})\s+\d+:\d+";
    WEEKDAY_TEXTUAL_NO_COMMA_TIME: Textual, "Weekday, Month d yyyy h:mm",
        r"[A-Za-z]+day,\s*(?P<date>[A-Za-z]+\s+\d{1,2}\s+\d{4})\s+\d+:\d+";
    LINE_TEXTUAL: Textual, "Month d, yyyy (line start)",
        r"^(?P<date>[A-Za-z]+\s+\d{1,2},\s*\d{4})";
    LINE_NUMERIC_TIME: Numeric, "m/d/yyyy h:mm (line start)",
        r"^(?P<date>\d{1,2}/\d{1,2}/\d{4})\s+\d+:\d+";
    LINE_NUMERIC: Numeric, "m/d/yyyy (line start)",
        r"^(?P<date>\d{1,2}/\d{1,2}/\d{4})";
    FAX_STAMP: Numeric, "mm/dd/yyyy hh:mm",
        r"(?P<date>\d{2}/\d{2}/\d{4})\s+\d{2}:\d{2}";
}

const BASIC: &[PatternDef] = &[
    SENT_NUMERIC,
    DATE_WEEKDAY_TEXTUAL,
    DATE_TEXTUAL,
    SENT_WEEKDAY_TEXTUAL,
];

const EXTENDED: &[PatternDef] = &[
    SENT_NUMERIC_TIME,
    SENT_NUMERIC,
    SENT_NO_COLON_NUMERIC_TIME,
    DATE_NUMERIC_TIME,
    DATE_NUMERIC,
    DATE_WEEKDAY_TEXTUAL,
    DATE_WEEKDAY_TEXTUAL_NO_COMMA,
    DATE_TEXTUAL,
    SENT_WEEKDAY_TEXTUAL,
    WEEKDAY_TEXTUAL_TIME,
    WEEKDAY_TEXTUAL_NO_COMMA_TIME,
    LINE_TEXTUAL,
    LINE_NUMERIC_TIME,
    LINE_NUMERIC,
    FAX_STAMP,
];

/// Patterns of a set, most specific first.
pub fn pattern_defs(set: PatternSet) -> &'static [PatternDef] {
    match set {
        PatternSet::Basic => BASIC,
        PatternSet::Extended => EXTENDED,
    }
}
