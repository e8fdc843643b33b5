/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Extract numbers, currencies and dates from the free text the scraper
//! copies off the purchase history page.
//!
//! Nothing here fails loudly: callers get `None` (or an empty token) and
//! decide how to degrade.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("Invalid regex"));
static ALPHA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("Invalid regex"));
/// Date shapes of `DATE_FORMATS` as they appear inside longer text
static EMBEDDED_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\b[A-Za-z]{3,9}\.?\s+\d{1,2},?\s+\d{4}\b",
        r"|\b\d{1,2}\.?\s+[A-Za-z]{3,9},?\s+\d{4}\b",
        r"|\b\d{4}[-./]\d{1,2}[-./]\d{1,2}\b",
        r"|\b\d{1,2}[./]\d{1,2}[./]\d{2,4}\b",
    ))
    .expect("Invalid regex")
});

// `%b` only takes three-letter month names, `%B` the spelled-out ones
const DATE_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%b. %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d %b, %Y",
    "%d %B, %Y",
    "%d. %b %Y",
    "%d. %B %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%d.%m.%Y",
    "%Y.%m.%d",
    "%Y/%m/%d",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M",
    "%B %d, %Y %H:%M",
];

const WEEKDAYS: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// First decimal numeral in the text: "US $12.99" → 12.99
pub fn price_value(text: &str) -> Option<f64> {
    DECIMAL_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Currency of a price text: the first alphabetic run ("EUR 5.00" → "EUR",
/// "US $4.99" → "US"), else the symbol in front of the amount ("£5" → "£").
pub fn currency_token(text: &str) -> String {
    if let Some(m) = ALPHA_RE.find(text) {
        return m.as_str().to_string();
    }
    text.trim()
        .chars()
        .take_while(|c| !c.is_ascii_digit() && !c.is_whitespace())
        .collect()
}

pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Drop everything up to the last hyphen: "Tue. Mar 14 - Fri. Mar 24, 2017" → "Fri. Mar 24, 2017"
pub fn strip_date_noise(text: &str) -> &str {
    match text.rfind('-') {
        Some(pos) => text[pos + 1..].trim_start(),
        None => text,
    }
}

/// Parse the date trailing any noise prefix. Falls back to the whole text so
/// ISO dates ("2017-03-12") survive the hyphen stripping, then to the last
/// date embedded in the text ("Shipped on Mar 03, 2017").
pub fn parse_trailing_date(text: &str) -> Option<NaiveDateTime> {
    parse_date(strip_date_noise(text))
        .or_else(|| parse_date(text))
        .or_else(|| embedded_date(text))
}

fn embedded_date(text: &str) -> Option<NaiveDateTime> {
    let candidates: Vec<&str> = EMBEDDED_DATE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    candidates.into_iter().rev().find_map(parse_date)
}

/// Lenient date parser for the formats purchase history pages show.
/// Date-only values resolve to midnight.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim().trim_end_matches(['.', ',']);
    if trimmed.is_empty() {
        return None;
    }

    if let Some(dt) = parse_exact(trimmed) {
        return Some(dt);
    }

    // "Fri. Mar 24, 2017" / "Tuesday, Mar 14, 2017"
    let (first, rest) = trimmed.split_once(char::is_whitespace)?;
    let weekday = first.trim_end_matches(['.', ',']).to_ascii_lowercase();
    if WEEKDAYS.iter().any(|w| weekday.starts_with(w)) {
        return parse_exact(rest.trim());
    }

    None
}

fn parse_exact(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Signed number of days from `earlier` to `later`, fractional.
pub fn days_between(later: NaiveDateTime, earlier: NaiveDateTime) -> f64 {
    later.signed_duration_since(earlier).num_milliseconds() as f64 / 86_400_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn price_value_takes_first_numeral() {
        assert_eq!(price_value("EUR 12.50"), Some(12.5));
        assert_eq!(price_value("US $4.99"), Some(4.99));
        assert_eq!(price_value("GBP 7"), Some(7.0));
        assert_eq!(price_value("free"), None);
    }

    #[test]
    fn currency_token_prefers_letters() {
        assert_eq!(currency_token("EUR 12.50"), "EUR");
        assert_eq!(currency_token("US $4.99"), "US");
        assert_eq!(currency_token("£5.00"), "£");
        assert_eq!(currency_token("12.00"), "");
    }

    #[test]
    fn strips_noise_up_to_last_hyphen() {
        assert_eq!(
            strip_date_noise("Tue. Mar 14 - Fri. Mar 24, 2017"),
            "Fri. Mar 24, 2017"
        );
        assert_eq!(strip_date_noise("Mar 24, 2017"), "Mar 24, 2017");
    }

    #[test]
    fn parses_common_page_formats() {
        assert_eq!(parse_date("Mar 12, 2017"), Some(ymd(2017, 3, 12)));
        assert_eq!(parse_date("March 2, 2017"), Some(ymd(2017, 3, 2)));
        assert_eq!(parse_date("12 Mar 2017"), Some(ymd(2017, 3, 12)));
        assert_eq!(parse_date("03/14/2017"), Some(ymd(2017, 3, 14)));
        assert_eq!(parse_date("2017-03-12"), Some(ymd(2017, 3, 12)));
        assert_eq!(parse_date("Fri. Mar 24, 2017"), Some(ymd(2017, 3, 24)));
        assert_eq!(parse_date("Tuesday, Mar 14, 2017"), Some(ymd(2017, 3, 14)));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not shipped yet"), None);
    }

    #[test]
    fn trailing_date_keeps_iso_dates() {
        assert_eq!(parse_trailing_date("2017-03-12"), Some(ymd(2017, 3, 12)));
        assert_eq!(
            parse_trailing_date("Estimated between Mar 14 - Mar 24, 2017"),
            Some(ymd(2017, 3, 24))
        );
    }

    #[test]
    fn spelled_out_months_parse() {
        assert_eq!(parse_date("September 30, 2017"), Some(ymd(2017, 9, 30)));
        assert_eq!(parse_date("2 March 2017"), Some(ymd(2017, 3, 2)));
        assert_eq!(parse_trailing_date("March 2, 2017"), Some(ymd(2017, 3, 2)));
    }

    #[test]
    fn trailing_date_finds_date_inside_text() {
        assert_eq!(
            parse_trailing_date("Shipped on Mar 03, 2017"),
            Some(ymd(2017, 3, 3))
        );
        assert_eq!(
            parse_trailing_date("Sent 2017-03-05 via post"),
            Some(ymd(2017, 3, 5))
        );
        assert_eq!(
            parse_trailing_date("Shipped March 3, 2017, tracking 12345"),
            Some(ymd(2017, 3, 3))
        );
        assert_eq!(parse_trailing_date("Not yet shipped"), None);
    }

    #[test]
    fn days_between_is_signed_and_fractional() {
        let a = ymd(2017, 3, 1);
        let b = ymd(2017, 3, 11);
        assert_eq!(days_between(b, a), 10.0);
        assert_eq!(days_between(a, b), -10.0);
        let noon = a + chrono::TimeDelta::hours(12);
        assert_eq!(days_between(noon, a), 0.5);
    }
}
