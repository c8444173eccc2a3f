use std::io::BufRead;

use regex::Regex;

use super::{InfileError, InfileRecord, InfileRecords};

struct Separators {
    key_value: Regex,
    value_description: Regex,
    units: Regex,
}

impl Separators {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            key_value: Regex::new(r#""\s+"#)?,
            value_description: Regex::new(r#"\s+""#)?,
            units: Regex::new(r"\[.+\]")?,
        })
    }
}

/// Physical lines that carry content, with 1-based line numbers.
struct ContentLines<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn next_line(&mut self) -> Result<Option<(usize, String)>, InfileError> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }
            return Ok(Some((self.line_no, line.to_string())));
        }
        Ok(None)
    }

    /// Append the next content line to `line`, or fail if the input ends.
    fn continue_record(&mut self, line: &mut String, start: usize, waiting_for: &str) -> Result<(), InfileError> {
        match self.next_line()? {
            Some((_, more)) => {
                line.push(' ');
                line.push_str(&more);
                Ok(())
            }
            None => Err(InfileError::Parse {
                line: start,
                message: format!("input ended while looking for {waiting_for}"),
            }),
        }
    }
}

/// Load every record from a SOG infile.
///
/// A record broken across physical lines is re-joined with single spaces,
/// reading forward until both the key/value and the value/description
/// boundaries have been found.
pub fn load<R: BufRead>(reader: R) -> Result<InfileRecords, InfileError> {
    let separators = Separators::new()?;
    let mut lines = ContentLines {
        lines: reader.lines(),
        line_no: 0,
    };
    let mut records = InfileRecords::new();

    while let Some((start, mut line)) = lines.next_line()? {
        let (key, mut rest) = loop {
            if let Some(m) = separators.key_value.find(&line) {
                break (line[..m.start()].to_string(), line[m.end()..].to_string());
            }
            lines.continue_record(&mut line, start, "the value after the key")?;
        };
        let key = key.strip_prefix('"').ok_or_else(|| InfileError::Parse {
            line: start,
            message: format!("key {key} does not start with a double quote"),
        })?;
        if key.is_empty() || key.contains('"') {
            return Err(InfileError::Parse {
                line: start,
                message: format!("malformed key \"{key}\""),
            });
        }

        let (value, description) = loop {
            if let Some(m) = separators.value_description.find(&rest) {
                break (rest[..m.start()].to_string(), rest[m.end()..].to_string());
            }
            lines.continue_record(&mut rest, start, &format!("the description of \"{key}\""))?;
        };
        let description = description.strip_suffix('"').ok_or_else(|| InfileError::Parse {
            line: start,
            message: format!("description of \"{key}\" has no closing double quote"),
        })?;

        let (description, units) = match separators.units.find(description) {
            Some(m) => (
                description.replacen(m.as_str(), "", 1).trim().to_string(),
                Some(m.as_str().trim_matches(['[', ']']).to_string()),
            ),
            None => (description.trim().to_string(), None),
        };

        records.insert(
            key.to_string(),
            InfileRecord {
                value: value.trim().to_string(),
                description,
                units,
            },
        );
    }

    Ok(records)
}

pub fn load_str(text: &str) -> Result<InfileRecords, InfileError> {
    load(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn maxdepth() -> InfileRecords {
        InfileRecords::from([(
            "maxdepth".to_string(),
            InfileRecord::new("40.0d0", "depth of modelled domain", Some("m")),
        )])
    }

    #[test]
    fn test_load_empty_input() {
        assert!(load_str("").unwrap().is_empty());
    }

    #[test]
    fn test_load_one_line() {
        let records = load_str(r#""maxdepth"  40.0d0  "depth of modelled domain [m]""#).unwrap();
        assert_eq!(records, maxdepth());
    }

    #[test]
    fn test_load_skips_comments_and_blank_lines() {
        let text = "! This is a comment\n\n   \n\"maxdepth\"  40.0d0  \"depth of modelled domain [m]\"\n";
        assert_eq!(load_str(text).unwrap(), maxdepth());
    }

    #[test]
    fn test_load_two_lines_without_units() {
        let text = "\"maxdepth\"  40.0d0  \"depth of modelled domain [m]\"\n\"gridsize\"  80  \"number of grid points\"";
        let records = load_str(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records["gridsize"],
            InfileRecord::new("80", "number of grid points", None)
        );
    }

    #[test]
    fn test_load_newline_after_key() {
        let text = "\"maxdepth\"\n  40.0d0  \"depth of modelled domain [m]\"";
        assert_eq!(load_str(text).unwrap(), maxdepth());
    }

    #[test]
    fn test_load_newline_after_value() {
        let text = "\"maxdepth\"  40.0d0\n  \"depth of modelled domain [m]\"";
        assert_eq!(load_str(text).unwrap(), maxdepth());
    }

    #[test]
    fn test_load_newlines_after_key_and_value() {
        let text = "\"maxdepth\"\n  40.0d0\n  \"depth of modelled domain [m]\"";
        assert_eq!(load_str(text).unwrap(), maxdepth());
    }

    #[test]
    fn test_load_one_token_per_line() {
        let text = "\"proftime\"\n  4.32d4\n  0.0d0\n\n  8.64d4\n  \"profile times [s]\"";
        let records = load_str(text).unwrap();
        assert_eq!(records["proftime"].value, "4.32d4 0.0d0 8.64d4");
        assert_eq!(records["proftime"].units.as_deref(), Some("s"));
    }

    #[test]
    fn test_load_keeps_quoted_values() {
        let text = r#""init datetime"  "2012-04-01 19:09:00"  "initialization CTD profile date/time""#;
        let records = load_str(text).unwrap();
        assert_eq!(records["init datetime"].value, "\"2012-04-01 19:09:00\"");
        assert_eq!(records["init datetime"].description, "initialization CTD profile date/time");
    }

    #[test]
    fn test_load_truncated_record_is_an_error() {
        let err = load_str("\"maxdepth\"  40.0d0").unwrap_err();
        assert!(matches!(err, InfileError::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn test_load_unquoted_key_is_an_error() {
        let err = load_str("maxdepth\"  40.0d0  \"depth\"").unwrap_err();
        assert!(matches!(err, InfileError::Parse { .. }));
    }

    #[test]
    fn test_load_unterminated_description_is_an_error() {
        let err = load_str("\"maxdepth\"  40.0d0  \"depth of modelled domain").unwrap_err();
        assert!(err.to_string().contains("closing double quote"), "{err}");
    }
}
