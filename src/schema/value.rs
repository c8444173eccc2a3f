//! Quantity values and their two lexical forms.
//!
//! In YAML a value is a native scalar or sequence. In the Fortran infile it
//! is a token string that SOG's list-directed reads accept: reals in
//! scientific notation with a `d` exponent, booleans as `.true.`/`.false.`,
//! strings and datetimes in double quotes, lists separated by spaces.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use serde_yaml::Value;
use thiserror::Error;

use super::SemanticType;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Integer(i64),
    Boolean(bool),
    DateTime(NaiveDateTime),
    NumberList(Vec<f64>),
    IntegerList(Vec<i64>),
    String(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("{found} is not {expected}")]
    Mismatch { expected: &'static str, found: String },

    #[error("cannot read {token:?} as {expected}")]
    Unreadable { expected: &'static str, token: String },
}

/// Format a real the way SOG's Fortran reads expect: `42.0` -> `4.200000d+01`.
///
/// The mantissa carries at least six decimals, more when the shortest
/// round-trip representation needs them.
pub fn fortran_real(x: f64) -> String {
    let sci = format!("{x:e}");
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{whole}.{frac:0<6}d{sign}{:02}", exponent.unsigned_abs())
}

fn read_real(token: &str) -> Result<f64, ValueError> {
    token
        .replace(['d', 'D'], "e")
        .parse()
        .map_err(|_| ValueError::Unreadable {
            expected: "a real number",
            token: token.to_string(),
        })
}

fn read_integer(token: &str) -> Result<i64, ValueError> {
    token.parse().map_err(|_| ValueError::Unreadable {
        expected: "an integer",
        token: token.to_string(),
    })
}

fn read_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn yaml_repr(raw: &Value) -> String {
    serde_yaml::to_string(raw)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{raw:?}"))
}

impl SemanticType {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "a number",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
            Self::DateTime => "a datetime (yyyy-mm-dd hh:mm:ss)",
            Self::NumberList => "a list of numbers",
            Self::IntegerList => "a list of integers",
            Self::String => "a string",
        }
    }

    fn mismatch(self, raw: &Value) -> ValueError {
        ValueError::Mismatch {
            expected: self.describe(),
            found: yaml_repr(raw),
        }
    }

    /// Validate and convert a YAML `value` field.
    pub fn from_yaml(self, raw: &Value) -> Result<ParamValue, ValueError> {
        let value = match self {
            Self::Number => raw.as_f64().map(ParamValue::Number),
            Self::Integer => raw.as_i64().map(ParamValue::Integer),
            Self::Boolean => raw.as_bool().map(ParamValue::Boolean),
            Self::DateTime => raw.as_str().and_then(read_datetime).map(ParamValue::DateTime),
            Self::String => raw.as_str().map(|s| ParamValue::String(s.to_string())),
            Self::NumberList => raw
                .as_sequence()
                .and_then(|items| items.iter().map(Value::as_f64).collect::<Option<Vec<_>>>())
                .map(ParamValue::NumberList),
            Self::IntegerList => raw
                .as_sequence()
                .and_then(|items| items.iter().map(Value::as_i64).collect::<Option<Vec<_>>>())
                .map(ParamValue::IntegerList),
        };
        value.ok_or_else(|| self.mismatch(raw))
    }

    /// Serialize a value to its infile token string.
    pub fn to_infile(self, value: &ParamValue) -> Result<String, ValueError> {
        let token = match (self, value) {
            (Self::Number, ParamValue::Number(x)) => fortran_real(*x),
            #[allow(clippy::cast_precision_loss)]
            (Self::Number, ParamValue::Integer(i)) => fortran_real(*i as f64),
            (Self::Integer, ParamValue::Integer(i)) => i.to_string(),
            (Self::Boolean, ParamValue::Boolean(b)) => String::from(if *b { ".true." } else { ".false." }),
            (Self::DateTime, ParamValue::DateTime(dt)) => {
                format!("\"{}\"", dt.format(DATETIME_FORMAT))
            }
            (Self::NumberList, ParamValue::NumberList(xs)) => xs
                .iter()
                .map(|x| fortran_real(*x))
                .collect::<Vec<_>>()
                .join(" "),
            (Self::IntegerList, ParamValue::IntegerList(xs)) => xs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            (Self::String, ParamValue::String(s)) => format!("\"{s}\""),
            (kind, other) => {
                return Err(ValueError::Mismatch {
                    expected: kind.describe(),
                    found: other.to_string(),
                })
            }
        };
        Ok(token)
    }

    /// Parse an infile token string.
    pub fn from_infile(self, token: &str) -> Result<ParamValue, ValueError> {
        let token = token.trim();
        let value = match self {
            Self::Number => ParamValue::Number(read_real(token)?),
            Self::Integer => ParamValue::Integer(read_integer(token)?),
            Self::Boolean => ParamValue::Boolean(token.eq_ignore_ascii_case(".true.")),
            Self::DateTime => {
                let text = token.trim_matches('"');
                ParamValue::DateTime(read_datetime(text).ok_or_else(|| {
                    ValueError::Unreadable {
                        expected: self.describe(),
                        token: token.to_string(),
                    }
                })?)
            }
            Self::NumberList => ParamValue::NumberList(
                token.split_whitespace().map(read_real).collect::<Result<_, _>>()?,
            ),
            Self::IntegerList => ParamValue::IntegerList(
                token
                    .split_whitespace()
                    .map(read_integer)
                    .collect::<Result<_, _>>()?,
            ),
            Self::String => ParamValue::String(token.trim_matches('"').to_string()),
        };
        Ok(value)
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join<T: ToString>(items: &[T]) -> String {
            items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        }
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            Self::NumberList(xs) => write!(f, "[{}]", join(xs)),
            Self::IntegerList(xs) => write!(f, "[{}]", join(xs)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(x) => serializer.serialize_f64(*x),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::DateTime(dt) => serializer.collect_str(&dt.format(DATETIME_FORMAT)),
            Self::NumberList(xs) => xs.serialize(serializer),
            Self::IntegerList(xs) => xs.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2012, 4, 1)
            .unwrap()
            .and_hms_opt(19, 9, 0)
            .unwrap()
    }

    #[test]
    fn test_fortran_real_matches_six_decimal_layout() {
        assert_eq!(fortran_real(42.0), "4.200000d+01");
        assert_eq!(fortran_real(0.0), "0.000000d+00");
        assert_eq!(fortran_real(-0.5), "-5.000000d-01");
        assert_eq!(fortran_real(1e100), "1.000000d+100");
    }

    #[test]
    fn test_fortran_real_keeps_extra_digits() {
        assert_eq!(fortran_real(0.123_456_789), "1.23456789d-01");
        assert_eq!(read_real(&fortran_real(0.123_456_789)).unwrap(), 0.123_456_789);
    }

    #[test]
    fn test_read_real_accepts_d_exponent() {
        assert_eq!(read_real("40.0d0").unwrap(), 40.0);
        assert_eq!(read_real("1.5D-3").unwrap(), 0.0015);
        assert!(read_real("forty").is_err());
    }

    #[test]
    fn test_boolean_tokens() {
        let kind = SemanticType::Boolean;
        assert_eq!(kind.to_infile(&ParamValue::Boolean(true)).unwrap(), ".true.");
        assert_eq!(kind.to_infile(&ParamValue::Boolean(false)).unwrap(), ".false.");
        assert_eq!(kind.from_infile(".TRUE.").unwrap(), ParamValue::Boolean(true));
        assert_eq!(kind.from_infile(".false.").unwrap(), ParamValue::Boolean(false));
        assert_eq!(kind.from_infile("yes").unwrap(), ParamValue::Boolean(false));
    }

    #[test]
    fn test_datetime_is_quoted_in_infile() {
        let kind = SemanticType::DateTime;
        let token = kind.to_infile(&ParamValue::DateTime(datetime())).unwrap();
        assert_eq!(token, "\"2012-04-01 19:09:00\"");
        assert_eq!(kind.from_infile(&token).unwrap(), ParamValue::DateTime(datetime()));
    }

    #[test]
    fn test_string_is_quoted_in_infile() {
        let kind = SemanticType::String;
        let value = ParamValue::String("../sog-forcing/wind/SHwind".into());
        let token = kind.to_infile(&value).unwrap();
        assert_eq!(token, "\"../sog-forcing/wind/SHwind\"");
        assert_eq!(kind.from_infile(&token).unwrap(), value);
    }

    #[test]
    fn test_lists_are_space_separated() {
        let kind = SemanticType::NumberList;
        let token = kind
            .to_infile(&ParamValue::NumberList(vec![0.2, 0.5, 0.3]))
            .unwrap();
        assert_eq!(token, "2.000000d-01 5.000000d-01 3.000000d-01");
        let ints = SemanticType::IntegerList
            .from_infile("1 32 45")
            .unwrap();
        assert_eq!(ints, ParamValue::IntegerList(vec![1, 32, 45]));
    }

    #[test]
    fn test_number_accepts_yaml_integer() {
        let raw: Value = serde_yaml::from_str("40").unwrap();
        assert_eq!(SemanticType::Number.from_yaml(&raw).unwrap(), ParamValue::Number(40.0));
    }

    #[test]
    fn test_integer_rejects_yaml_real() {
        let raw: Value = serde_yaml::from_str("40.5").unwrap();
        let err = SemanticType::Integer.from_yaml(&raw).unwrap_err();
        assert_eq!(
            err,
            ValueError::Mismatch {
                expected: "an integer",
                found: "40.5".into()
            }
        );
    }

    #[test]
    fn test_yaml_datetime_string() {
        let raw: Value = serde_yaml::from_str("2012-04-01 19:09:00").unwrap();
        assert_eq!(
            SemanticType::DateTime.from_yaml(&raw).unwrap(),
            ParamValue::DateTime(datetime())
        );
    }

    #[test]
    fn test_yaml_list_with_non_number_item() {
        let raw: Value = serde_yaml::from_str("[1.0, fish, 3.0]").unwrap();
        assert!(SemanticType::NumberList.from_yaml(&raw).is_err());
    }

    #[test]
    fn test_to_infile_rejects_wrong_variant() {
        let err = SemanticType::Boolean
            .to_infile(&ParamValue::Integer(1))
            .unwrap_err();
        assert!(matches!(err, ValueError::Mismatch { expected: "a boolean", .. }));
    }
}
