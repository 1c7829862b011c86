//! Moment-style format tokens over `time` values.
//!
//! Supported tokens: `YYYY`, `YY`, `MMMM`, `MMM`, `MM`, `M`, `DD`, `D`, `HH`,
//! `H`, `hh`, `h`, `mm`, `m`, `ss`, `s`, `A`, `a`. Text in square brackets is
//! copied verbatim; everything else is a literal.

use core::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use time::{Date, Month, PrimitiveDateTime, Time};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]|YYYY|YY|MMMM|MMM|MM|M|DD|D|HH|H|hh|h|mm|m|ss|s|A|a")
        .expect("format token pattern is valid")
});

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One piece of a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `YYYY`
    Year,
    /// `YY`, years 2000 to 2099.
    ShortYear,
    /// `MMMM`
    MonthName,
    /// `MMM`
    MonthAbbrev,
    /// `MM`
    MonthPadded,
    /// `M`
    Month,
    /// `DD`
    DayPadded,
    /// `D`
    Day,
    /// `HH`
    Hour24Padded,
    /// `H`
    Hour24,
    /// `hh`
    Hour12Padded,
    /// `h`
    Hour12,
    /// `mm`
    MinutePadded,
    /// `m`
    Minute,
    /// `ss`
    SecondPadded,
    /// `s`
    Second,
    /// `A`
    MeridiemUpper,
    /// `a`
    MeridiemLower,
    /// Verbatim text.
    Literal(String),
}

impl Token {
    fn from_match(text: &str) -> Self {
        match text {
            "YYYY" => Self::Year,
            "YY" => Self::ShortYear,
            "MMMM" => Self::MonthName,
            "MMM" => Self::MonthAbbrev,
            "MM" => Self::MonthPadded,
            "M" => Self::Month,
            "DD" => Self::DayPadded,
            "D" => Self::Day,
            "HH" => Self::Hour24Padded,
            "H" => Self::Hour24,
            "hh" => Self::Hour12Padded,
            "h" => Self::Hour12,
            "mm" => Self::MinutePadded,
            "m" => Self::Minute,
            "ss" => Self::SecondPadded,
            "s" => Self::Second,
            "A" => Self::MeridiemUpper,
            "a" => Self::MeridiemLower,
            bracketed => Self::Literal(bracketed[1..bracketed.len() - 1].to_owned()),
        }
    }

    fn pattern(&self) -> String {
        let pattern = match self {
            Self::Year => r"(\d{4})",
            Self::ShortYear
            | Self::MonthPadded
            | Self::DayPadded
            | Self::Hour24Padded
            | Self::Hour12Padded
            | Self::MinutePadded
            | Self::SecondPadded => r"(\d{2})",
            Self::Month | Self::Day | Self::Hour24 | Self::Hour12 | Self::Minute | Self::Second => {
                r"(\d{1,2})"
            }
            Self::MonthName => r"([A-Za-z]+)",
            Self::MonthAbbrev => r"([A-Za-z]{3})",
            Self::MeridiemUpper | Self::MeridiemLower => r"([AaPp][Mm])",
            Self::Literal(text) => return regex::escape(text),
        };
        pattern.to_owned()
    }
}

/// Splits `format` into tokens and literals.
#[must_use]
pub fn tokenize(format: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for found in TOKEN.find_iter(format) {
        if found.start() > cursor {
            tokens.push(Token::Literal(format[cursor..found.start()].to_owned()));
        }
        tokens.push(Token::from_match(found.as_str()));
        cursor = found.end();
    }
    if cursor < format.len() {
        tokens.push(Token::Literal(format[cursor..].to_owned()));
    }
    tokens
}

/// Renders `value` with `format`.
#[must_use]
pub fn format(value: &PrimitiveDateTime, format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 8);
    let hour12 = match value.hour() % 12 {
        0 => 12,
        hour => hour,
    };
    let pm = value.hour() >= 12;
    for token in tokenize(format) {
        let _ = match token {
            Token::Year => write!(out, "{:04}", value.year()),
            Token::ShortYear => write!(out, "{:02}", value.year().rem_euclid(100)),
            Token::MonthName => out.write_str(month_name(value.month())),
            Token::MonthAbbrev => out.write_str(&month_name(value.month())[..3]),
            Token::MonthPadded => write!(out, "{:02}", u8::from(value.month())),
            Token::Month => write!(out, "{}", u8::from(value.month())),
            Token::DayPadded => write!(out, "{:02}", value.day()),
            Token::Day => write!(out, "{}", value.day()),
            Token::Hour24Padded => write!(out, "{:02}", value.hour()),
            Token::Hour24 => write!(out, "{}", value.hour()),
            Token::Hour12Padded => write!(out, "{hour12:02}"),
            Token::Hour12 => write!(out, "{hour12}"),
            Token::MinutePadded => write!(out, "{:02}", value.minute()),
            Token::Minute => write!(out, "{}", value.minute()),
            Token::SecondPadded => write!(out, "{:02}", value.second()),
            Token::Second => write!(out, "{}", value.second()),
            Token::MeridiemUpper => out.write_str(if pm { "PM" } else { "AM" }),
            Token::MeridiemLower => out.write_str(if pm { "pm" } else { "am" }),
            Token::Literal(text) => out.write_str(&text),
        };
    }
    out
}

/// Parses `value` with `format`.
///
/// Date parts missing from the format are taken from `base` when the format
/// has no date tokens at all, and default to January 1st of `base`'s year
/// otherwise. Missing time parts default to zero.
#[must_use]
pub fn parse(value: &str, format: &str, base: PrimitiveDateTime) -> Option<PrimitiveDateTime> {
    let tokens = tokenize(format);
    let mut pattern = String::from("^");
    for token in &tokens {
        pattern.push_str(&token.pattern());
    }
    pattern.push('$');

    let captures = Regex::new(&pattern).ok()?.captures(value.trim())?;
    let mut fields = Fields::default();
    let mut group = 1;
    for token in &tokens {
        if matches!(token, Token::Literal(_)) {
            continue;
        }
        let text = captures.get(group)?.as_str();
        group += 1;
        fields.read(token, text)?;
    }
    fields.build(base)
}

#[derive(Debug, Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    hour24: Option<u8>,
    hour12: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    pm: Option<bool>,
}

impl Fields {
    fn read(&mut self, token: &Token, text: &str) -> Option<()> {
        match token {
            Token::Year => self.year = Some(text.parse().ok()?),
            Token::ShortYear => self.year = Some(2000 + text.parse::<i32>().ok()?),
            Token::MonthName | Token::MonthAbbrev => self.month = Some(month_from_name(text)?),
            Token::MonthPadded | Token::Month => self.month = Some(text.parse().ok()?),
            Token::DayPadded | Token::Day => self.day = Some(text.parse().ok()?),
            Token::Hour24Padded | Token::Hour24 => self.hour24 = Some(text.parse().ok()?),
            Token::Hour12Padded | Token::Hour12 => self.hour12 = Some(text.parse().ok()?),
            Token::MinutePadded | Token::Minute => self.minute = Some(text.parse().ok()?),
            Token::SecondPadded | Token::Second => self.second = Some(text.parse().ok()?),
            Token::MeridiemUpper | Token::MeridiemLower => {
                self.pm = Some(text.eq_ignore_ascii_case("pm"));
            }
            Token::Literal(_) => {}
        }
        Some(())
    }

    fn build(self, base: PrimitiveDateTime) -> Option<PrimitiveDateTime> {
        let date = if self.year.is_none() && self.month.is_none() && self.day.is_none() {
            base.date()
        } else {
            Date::from_calendar_date(
                self.year.unwrap_or_else(|| base.year()),
                Month::try_from(self.month.unwrap_or(1)).ok()?,
                self.day.unwrap_or(1),
            )
            .ok()?
        };

        let hour = match (self.hour24, self.hour12) {
            (Some(hour), _) => hour,
            (None, Some(hour)) if (1..=12).contains(&hour) => {
                hour % 12 + if self.pm.unwrap_or(false) { 12 } else { 0 }
            }
            (None, Some(_)) => return None,
            (None, None) => 0,
        };
        let time = Time::from_hms(hour, self.minute.unwrap_or(0), self.second.unwrap_or(0)).ok()?;
        Some(PrimitiveDateTime::new(date, time))
    }
}

fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[usize::from(u8::from(month)) - 1]
}

fn month_from_name(text: &str) -> Option<u8> {
    MONTH_NAMES
        .iter()
        .position(|name| {
            name.eq_ignore_ascii_case(text)
                || (text.len() == 3 && name[..3].eq_ignore_ascii_case(text))
        })
        .and_then(|index| u8::try_from(index + 1).ok())
}
