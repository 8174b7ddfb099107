use crate::core::planner::Planner;
use crate::core::store::StateStore;
use crate::errors::AppResult;
use crate::export::{
    DailyExportRow, ExportFormat, MonthlyExport, ensure_writable, export_csv, export_json,
};
use crate::models::shift_date::month_key;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the salary breakdown of `year`-`month` to `file`.
    ///
    /// - CSV: one row per assigned day
    /// - JSON: the monthly summary plus the same daily rows
    ///
    /// A missing extension is taken from the format. Returns the path
    /// actually written.
    pub fn export<S: StateStore>(
        planner: &Planner<S>,
        format: ExportFormat,
        file: &str,
        year: i32,
        month: u32,
        force: bool,
    ) -> AppResult<PathBuf> {
        let mut path = expand_tilde(file);
        if path.extension().is_none() {
            path.set_extension(format.as_str());
        }
        ensure_writable(&path, force)?;

        let rows: Vec<DailyExportRow> = planner
            .daily_salaries(year, month)
            .iter()
            .map(DailyExportRow::from)
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => {
                let doc = MonthlyExport {
                    month: month_key(year, month),
                    summary: planner.monthly_salary(year, month),
                    days: rows,
                };
                export_json(&doc, &path)?
            }
        }

        Ok(path)
    }
}
