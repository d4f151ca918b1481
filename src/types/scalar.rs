//! Scalar coercers: string, integer, boolean, date (`YYYY-MM-DD`) and datetime (RFC 3339).

use crate::error::CastError;
use crate::types::json_kind;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn cast_string(raw: &Value) -> Result<Option<String>, CastError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(mismatch("string", other)),
    }
}

pub(crate) fn cast_integer(raw: &Value) -> Result<Option<i64>, CastError> {
    match raw {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
                _ => Err(parse("integer", n.to_string())),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| parse("integer", s.clone())),
        other => Err(mismatch("integer", other)),
    }
}

pub(crate) fn cast_boolean(raw: &Value) -> Result<Option<bool>, CastError> {
    match raw {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Value::String(s) => Err(parse("boolean", s.clone())),
        other => Err(mismatch("boolean", other)),
    }
}

pub(crate) fn cast_date(raw: &Value) -> Result<Option<NaiveDate>, CastError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| parse("date", s.clone())),
        other => Err(mismatch("date", other)),
    }
}

pub(crate) fn cast_datetime(raw: &Value) -> Result<Option<DateTime<Utc>>, CastError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|d| Some(d.with_timezone(&Utc)))
            .map_err(|_| parse("datetime", s.clone())),
        other => Err(mismatch("datetime", other)),
    }
}

pub(crate) fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub(crate) fn format_datetime(d: &DateTime<Utc>) -> String {
    d.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn mismatch(expected: &'static str, found: &Value) -> CastError {
    CastError::TypeMismatch {
        expected,
        found: json_kind(found),
    }
}

fn parse(expected: &'static str, value: String) -> CastError {
    CastError::Parse { expected, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn strings_pass_through_and_numbers_stringify() {
        assert_eq!(cast_string(&json!("abc")).unwrap(), Some("abc".into()));
        assert_eq!(cast_string(&json!(42)).unwrap(), Some("42".into()));
        assert!(cast_string(&json!({ "a": 1 })).is_err());
    }

    #[test]
    fn integers_accept_numbers_and_numeric_strings() {
        assert_eq!(cast_integer(&json!(1500)).unwrap(), Some(1500));
        assert_eq!(cast_integer(&json!(25.0)).unwrap(), Some(25));
        assert_eq!(cast_integer(&json!("77")).unwrap(), Some(77));
        assert!(matches!(cast_integer(&json!(2.5)), Err(CastError::Parse { .. })));
        assert!(matches!(cast_integer(&json!("x")), Err(CastError::Parse { .. })));
        assert!(matches!(cast_integer(&json!(true)), Err(CastError::TypeMismatch { .. })));
    }

    #[test]
    fn booleans() {
        assert_eq!(cast_boolean(&json!(true)).unwrap(), Some(true));
        assert_eq!(cast_boolean(&json!("false")).unwrap(), Some(false));
        assert!(cast_boolean(&json!("yes")).is_err());
    }

    #[test]
    fn dates_use_the_fixed_format() {
        let d = cast_date(&json!("2001-08-15")).unwrap().unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2001, 8, 15).unwrap());
        assert_eq!(format_date(&d), "2001-08-15");
        assert!(cast_date(&json!("08/15/2001")).is_err());
    }

    #[test]
    fn datetimes_normalize_to_utc() {
        let d = cast_datetime(&json!("2024-03-01T10:00:00-05:00")).unwrap().unwrap();
        assert_eq!(d, Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap());
        assert_eq!(format_datetime(&d), "2024-03-01T15:00:00Z");
        assert!(cast_datetime(&json!("yesterday")).is_err());
    }
}
