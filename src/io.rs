use crate::model::{ClosingEntry, CustomClosure, Options};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Import de fermetures depuis CSV: header `date,event[,options]`.
///
/// `options` is a JSON object. Empty `date`/`event` cells are kept as missing
/// fields so the engine can report and skip those rows on its own.
pub fn import_closures_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CustomClosure>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let options = match non_empty(rec.get(2)) {
            Some(raw) => Some(
                serde_json::from_str::<Options>(&raw)
                    .with_context(|| format!("invalid options JSON on row {}", line + 1))?,
            ),
            None => None,
        };
        out.push(CustomClosure {
            date: non_empty(rec.get(0)),
            event: non_empty(rec.get(1)),
            options,
        });
    }
    Ok(out)
}

fn non_empty(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Écrit le calendrier en CSV: header `timestamp,date,event,type,options`.
pub fn write_calendar_csv<W: Write>(
    writer: W,
    calendar: &BTreeMap<i64, ClosingEntry>,
) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["timestamp", "date", "event", "type", "options"])?;
    for entry in calendar.values() {
        let options = match &entry.options {
            Some(map) => serde_json::to_string(map)?,
            None => String::new(),
        };
        let timestamp = entry.timestamp.to_string();
        w.write_record([
            timestamp.as_str(),
            entry.date.as_str(),
            entry.event.as_str(),
            entry.kind.as_str(),
            options.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_calendar_csv<P: AsRef<Path>>(
    path: P,
    calendar: &BTreeMap<i64, ClosingEntry>,
) -> Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_calendar_csv(file, calendar)
}

/// Export JSON du calendrier (tableau trié, jolie mise en forme)
pub fn export_calendar_json<P: AsRef<Path>>(
    path: P,
    calendar: &BTreeMap<i64, ClosingEntry>,
) -> Result<()> {
    let entries: Vec<&ClosingEntry> = calendar.values().collect();
    let s = serde_json::to_string_pretty(&entries)?;
    fs::write(path, s)?;
    Ok(())
}
