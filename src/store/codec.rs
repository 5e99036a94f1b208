//! CSV encoding of the event collection.
//!
//! Layout (UTF-8, `\n` terminated, standard CSV quoting):
//!
//! ```text
//! 학생ID,구분,시간
//! 10101,반출,2025-03-04 08:12:55
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::{Action, Event};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

/// Header row, in field order: owner id, action, timestamp.
pub const HEADER: [&str; 3] = ["학생ID", "구분", "시간"];

/// Serialize the whole collection, header included.
pub fn encode(events: &[Event]) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADER)?;

    for ev in events {
        wtr.write_record([
            ev.owner_id.as_str(),
            ev.action.to_store_token(),
            ev.timestamp_str().as_str(),
        ])?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Io(std::io::Error::other(format!("CSV flush error: {e}"))))
}

/// Parse a full store content. Anything that does not match the layout is
/// reported as `StorageCorrupt`, never skipped.
pub fn decode(content: &[u8], source_name: &str) -> AppResult<Vec<Event>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content);

    let header = rdr
        .headers()
        .map_err(|e| AppError::corrupt(source_name, format!("unreadable header: {e}")))?
        .clone();
    check_header(&header, source_name)?;

    let mut events = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        // header is line 1
        let line = idx + 2;
        let record = record.map_err(|e| AppError::corrupt(source_name, format!("line {line}: {e}")))?;
        events.push(parse_record(&record, line, source_name)?);
    }

    Ok(events)
}

fn check_header(header: &StringRecord, source_name: &str) -> AppResult<()> {
    let found: Vec<&str> = header
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
        .collect();

    if found != HEADER {
        return Err(AppError::corrupt(
            source_name,
            format!(
                "unexpected header [{}], expected [{}]",
                found.join(","),
                HEADER.join(",")
            ),
        ));
    }
    Ok(())
}

fn parse_record(record: &StringRecord, line: usize, source_name: &str) -> AppResult<Event> {
    // field count is enforced by the reader (non-flexible)
    let owner = &record[0];
    let token = &record[1];
    let ts = &record[2];

    if owner.trim().is_empty() {
        return Err(AppError::corrupt(source_name, format!("line {line}: empty owner id")));
    }

    let action = Action::from_store_token(token).ok_or_else(|| {
        AppError::corrupt(source_name, format!("line {line}: unknown action '{token}'"))
    })?;

    let timestamp = Event::parse_timestamp(ts).ok_or_else(|| {
        AppError::corrupt(source_name, format!("line {line}: invalid timestamp '{ts}'"))
    })?;

    Ok(Event::new(owner, action, timestamp))
}
