use crate::cli::commands::open_planner;
use crate::cli::parser::{Commands, PatternAction};
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::{AppError, AppResult};
use crate::models::pattern_group::PatternGroup;
use crate::models::preset::RangePreset;
use crate::models::shift_date::ShiftDate;
use crate::models::shift_type::ShiftType;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Pattern { action } = cmd else {
        return Ok(());
    };

    match action {
        PatternAction::Apply {
            preset,
            sequence,
            range,
            from,
            to,
        } => apply(cfg, *preset, sequence.as_deref(), *range, from, to),
        PatternAction::Edit { id, from, to } => edit(cfg, id, from, to),
        PatternAction::Show { date } => show(cfg, date),
        PatternAction::List => list(cfg),
    }
}

fn parse_opt_date(s: &Option<String>) -> AppResult<Option<ShiftDate>> {
    s.as_deref().map(ShiftDate::parse).transpose()
}

fn apply(
    cfg: &Config,
    preset: Option<crate::models::preset::PatternPreset>,
    sequence: Option<&str>,
    range: Option<RangePreset>,
    from: &Option<String>,
    to: &Option<String>,
) -> AppResult<()> {
    //
    // 1. Resolve the repeating sequence
    //
    let (source, pattern): (&str, Vec<ShiftType>) = match (preset, sequence) {
        (Some(p), _) => (p.as_str(), p.pattern()),
        (None, Some(seq)) => ("sequence", ShiftType::parse_sequence(seq)?),
        (None, None) => {
            return Err(AppError::InvalidPattern(
                "use --preset or --sequence".into(),
            ));
        }
    };

    //
    // 2. Resolve the date range
    //
    let from = parse_opt_date(from)?;
    let to = parse_opt_date(to)?;
    let range = range.unwrap_or(if from.is_some() || to.is_some() {
        RangePreset::Custom
    } else {
        RangePreset::Today
    });
    let (start, end) = range.resolve(ShiftDate::today(), cfg.pattern_horizon_months, from, to)?;

    //
    // 3. Apply
    //
    let mut planner = open_planner(cfg)?;
    let group = planner.add_pattern_group(start, end, pattern)?;

    success(format!(
        "Pattern {} applied: [{}] from {} to {} ({} days)",
        group.short_id(),
        group.pattern_label(),
        group.start_date,
        group.end_date,
        group.start_date.days_until(&group.end_date) + 1
    ));

    ttlog_soft(
        planner.store().conn(),
        "pattern_apply",
        &group.id,
        &format!(
            "{} [{}] {} → {}",
            source,
            group.pattern_label(),
            group.start_date,
            group.end_date
        ),
    );

    Ok(())
}

fn edit(cfg: &Config, id: &str, from: &str, to: &str) -> AppResult<()> {
    let new_start = ShiftDate::parse(from)?;
    let new_end = ShiftDate::parse(to)?;

    let mut planner = open_planner(cfg)?;
    let full_id = planner.resolve_group_id(id)?;

    let old = planner
        .registry()
        .pattern_group(&full_id)
        .map(|g| (g.start_date, g.end_date));

    // the planner treats an unknown id as a no-op; the CLI reports it
    let updated = planner
        .update_pattern_group_dates(&full_id, new_start, new_end)?
        .ok_or_else(|| AppError::NotFound(format!("pattern group '{id}'")))?;

    if let Some((os, oe)) = old {
        success(format!(
            "Pattern {} moved: {} → {} is now {} → {}",
            updated.short_id(),
            os,
            oe,
            updated.start_date,
            updated.end_date
        ));
    }

    ttlog_soft(
        planner.store().conn(),
        "pattern_edit",
        &updated.id,
        &format!("{} → {}", updated.start_date, updated.end_date),
    );

    Ok(())
}

fn show(cfg: &Config, date: &str) -> AppResult<()> {
    let d = ShiftDate::parse(date)?;
    let planner = open_planner(cfg)?;

    match planner.find_pattern_group_for_date(&d) {
        Some(g) => {
            print_group(g);

            let current = planner.registry().shift_on(&d);
            let offset = g.start_date.days_until(&d) as usize;
            let expected = g.pattern[offset % g.pattern.len()];
            if current != Some(expected) {
                warning(format!(
                    "{} currently holds {}, the pattern would give {}",
                    d,
                    current.map(|s| s.as_str()).unwrap_or("no shift"),
                    expected
                ));
            }
        }
        None => info(format!("No pattern covers {}", d)),
    }

    Ok(())
}

fn list(cfg: &Config) -> AppResult<()> {
    let planner = open_planner(cfg)?;
    let groups = planner.registry().pattern_groups();

    if groups.is_empty() {
        info("No patterns stored.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("FROM"),
        Column::left("TO"),
        Column::right("DAYS"),
        Column::left("PATTERN"),
    ])
    .with_separator(&cfg.separator_char);

    for g in groups {
        table.add_row(vec![
            g.short_id().to_string(),
            g.start_date.to_string(),
            g.end_date.to_string(),
            (g.start_date.days_until(&g.end_date) + 1).to_string(),
            g.pattern_label(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

fn print_group(g: &PatternGroup) {
    println!("Pattern : {}", g.id);
    println!("Range   : {} → {}", g.start_date, g.end_date);
    println!("Sequence: {}", g.pattern_label());
}
