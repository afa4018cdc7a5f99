// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ObservationExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `rows` to `path` in `format`.
pub(crate) fn write_rows(format: ExportFormat, rows: &[ObservationExport], path: &Path) -> AppResult<()> {
    info(format!(
        "Exporting to {}: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));

    let file = File::create(path)?;
    match format {
        ExportFormat::Csv => write_csv(rows, file)?,
        ExportFormat::Json => write_json(rows, BufWriter::new(file))?,
    }

    notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
    Ok(())
}

/// Pretty-printed JSON array.
fn write_json<W: Write>(rows: &[ObservationExport], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    out.flush()?;
    Ok(())
}

/// CSV with a header row taken from the field names.
fn write_csv<W: Write>(rows: &[ObservationExport], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, text: &str, sentiment: &str, score: f64) -> ObservationExport {
        ObservationExport {
            id,
            timestamp: "2025-01-01 10:00:00".into(),
            text: text.into(),
            sentiment: sentiment.into(),
            score,
        }
    }

    #[test]
    fn csv_quotes_text_with_commas() {
        let mut buf = Vec::new();
        write_csv(&[row(1, "Oil up, gold down", "positive", 0.4)], &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "id,timestamp,text,sentiment,score\n1,2025-01-01 10:00:00,\"Oil up, gold down\",positive,0.4\n"
        );
    }

    #[test]
    fn json_is_an_array_of_objects() {
        let mut buf = Vec::new();
        write_json(&[row(2, "Crash", "negative", -0.8)], &mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v[0]["id"], 2);
        assert_eq!(v[0]["score"], -0.8);
    }
}
