use std::io::Write;

use tracing::debug;

use super::{InfileError, InfileRecord, InfileRecords};
use crate::config::defaults::MAX_INFILE_LINE_LEN;
use crate::schema::InfileLayout;

/// Write `records` as a SOG infile in the order given by `layout`.
///
/// The whole infile is rendered before anything is written, so a missing
/// key never leaves a truncated infile behind.
pub fn dump<W: Write>(records: &InfileRecords, layout: &InfileLayout, writer: &mut W) -> Result<(), InfileError> {
    let text = dump_to_string(records, layout)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn dump_to_string(records: &InfileRecords, layout: &InfileLayout) -> Result<String, InfileError> {
    let mut out = String::new();
    for key in &layout.key_order {
        let line = build_line(records, key)?;
        write_avg_hist_forcing(records, layout, key, &mut out)?;
        push_line(&mut out, &line);
        write_extra_keys(records, layout, key, &mut out)?;
    }
    Ok(out)
}

fn record<'a>(records: &'a InfileRecords, key: &str) -> Result<&'a InfileRecord, InfileError> {
    records
        .get(key)
        .ok_or_else(|| InfileError::MissingKey(key.to_string()))
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Split a value into the tokens written one per line in the broken layout.
/// A quoted value stays whole.
fn value_tokens(value: &str) -> Vec<&str> {
    if value.starts_with('"') {
        vec![value]
    } else {
        value.split_whitespace().collect()
    }
}

/// Render one record, breaking it over several lines if it is too long.
fn build_line(records: &InfileRecords, key: &str) -> Result<String, InfileError> {
    let rec = record(records, key)?;
    let closing = match &rec.units {
        Some(units) => format!(" [{units}]\""),
        None => "\"".to_string(),
    };
    let line = format!("\"{key}\"  {}  \"{}{closing}", rec.value, rec.description);
    if line.chars().count() <= MAX_INFILE_LINE_LEN {
        return Ok(line);
    }

    debug!(key, "Breaking long infile line");
    let mut broken = format!("\"{key}\"");
    for token in value_tokens(&rec.value) {
        broken.push_str("\n  ");
        broken.push_str(token);
    }
    broken.push_str("\n  \"");
    broken.push_str(&rec.description);
    broken.push_str(&closing);

    // A quoted value or a description can still be too long on its own.
    if let Some(len) = broken
        .lines()
        .map(|l| l.chars().count())
        .find(|len| *len > MAX_INFILE_LINE_LEN)
    {
        return Err(InfileError::LineTooLong {
            key: key.to_string(),
            len,
            max: MAX_INFILE_LINE_LEN,
        });
    }
    Ok(broken)
}

/// Conditional keys follow their parent, chosen by the parent's value.
fn write_extra_keys(
    records: &InfileRecords,
    layout: &InfileLayout,
    key: &str,
    out: &mut String,
) -> Result<(), InfileError> {
    if !layout.extra_keys.contains_key(key) {
        return Ok(());
    }
    let value = &record(records, key)?.value;
    for extra in layout.extra_keys_for(key, value) {
        push_line(out, &build_line(records, extra)?);
        write_extra_keys(records, layout, extra, out)?;
    }
    Ok(())
}

/// Average/historical forcing keys precede their forcing key.
fn write_avg_hist_forcing(
    records: &InfileRecords,
    layout: &InfileLayout,
    key: &str,
    out: &mut String,
) -> Result<(), InfileError> {
    let Some(forcing) = layout.avg_hist_forcing_keys.get(key) else {
        return Ok(());
    };
    let trigger_value = record(records, &forcing.trigger)?.value.trim_matches('"');
    if let Some(keys) = forcing.keys.get(trigger_value) {
        for special in keys {
            push_line(out, &build_line(records, special)?);
        }
    }
    Ok(())
}
