// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{DailyExportRow, ExportFormat, MonthlyExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub fn export_json(doc: &MonthlyExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting {} to JSON: {}", doc.month, path.display()));

    let json_data = serde_json::to_string_pretty(doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success(ExportFormat::Json, path, doc.days.len());
    Ok(())
}

/// Export CSV (header included thanks to serde).
pub fn export_csv(rows: &[DailyExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success(ExportFormat::Csv, path, rows.len());
    Ok(())
}
