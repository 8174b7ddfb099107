use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_shift, color_for_weekday, colorize_optional, paint};
use crate::utils::date;
use crate::utils::formatting::truncate;
use crate::utils::describe_shift;
use crate::utils::table::{Column, Table};

const DIARY_PREVIEW: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, all } = cmd {
        let (start, end) = match period {
            Some(p) => date::resolve_period(p)?,
            None => {
                let (y, m) = date::current_month();
                date::month_range(y, m)?
            }
        };

        let planner = open_planner(cfg)?;
        let registry = planner.registry();

        let mut columns = vec![Column::left("DATE")];
        if cfg.show_weekday {
            columns.push(Column::left("DAY"));
        }
        columns.extend([
            Column::left("SHIFT"),
            Column::left("PATTERN"),
            Column::left("DIARY"),
        ]);
        let mut table = Table::new(columns).with_separator(&cfg.separator_char);

        for d in start.iter_to(end) {
            let shift = registry.shift_on(&d);
            let diary = planner.diary().get(&d);

            if !*all && shift.is_none() && diary.is_none() {
                continue;
            }

            let pattern = registry
                .find_pattern_group_for_date(&d)
                .map(|g| g.short_id().to_string())
                .unwrap_or_else(|| "--".into());

            let mut row = vec![paint(color_for_weekday(d.is_weekend()), &d.to_string())];
            if cfg.show_weekday {
                row.push(d.weekday().to_string());
            }
            row.push(paint(color_for_shift(shift), &describe_shift(shift)));
            row.push(colorize_optional(&pattern));
            row.push(colorize_optional(
                &diary
                    .map(|t| truncate(t, DIARY_PREVIEW))
                    .unwrap_or_else(|| "--".into()),
            ));
            table.add_row(row);
        }

        header(format!("{} → {}", start, end));
        if table.rows.is_empty() {
            info("No shifts or diary entries in this period.");
        } else {
            print!("{}", table.render());
        }
    }

    Ok(())
}
