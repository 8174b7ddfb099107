use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::salary::MonthlySalary;
use crate::models::salary_rules::SalaryRules;
use crate::models::shift_date::month_key;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREEN, RESET, color_for_shift, paint};
use crate::utils::date;
use crate::utils::format_money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Salary { month, daily } = cmd {
        let (year, m) = match month {
            Some(s) => date::parse_month(s)?,
            None => date::current_month(),
        };

        let planner = open_planner(cfg)?;
        let summary = planner.monthly_salary(year, m);

        header(format!("Salary {}", month_key(year, m)));
        print_summary(&summary, planner.rules(), &cfg.currency_symbol);

        if *daily {
            let days = planner.daily_salaries(year, m);
            if days.is_empty() {
                info("No shifts assigned in this month.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::left("DATE"),
                Column::left("DAY"),
                Column::left("SHIFT"),
                Column::right("BASE"),
                Column::right("NIGHT"),
                Column::right("WEEKEND"),
                Column::right("TOTAL"),
            ])
            .with_separator(&cfg.separator_char);

            for d in &days {
                table.add_row(vec![
                    d.date.to_string(),
                    d.date.weekday().to_string(),
                    paint(color_for_shift(Some(d.shift_type)), d.shift_type.as_str()),
                    format_money(d.base_pay.round() as i64),
                    format_money(d.night_allowance.round() as i64),
                    format_money(d.weekend_allowance.round() as i64),
                    format_money(d.total_pay.round() as i64),
                ]);
            }

            println!();
            print!("{}", table.render());
        }
    }

    Ok(())
}

fn money(sym: &str, v: i64) -> String {
    format!("{sym} {}", format_money(v))
}

fn print_summary(s: &MonthlySalary, rules: &SalaryRules, sym: &str) {
    println!(
        "{}Total pay:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        money(sym, s.total_pay),
        RESET
    );
    println!("  Base pay          : {}", money(sym, s.base_pay));
    if s.night_allowance > 0 {
        println!("  Night allowance   : {}", money(sym, s.night_allowance));
    }
    if s.weekend_allowance > 0 {
        println!("  Weekend allowance : {}", money(sym, s.weekend_allowance));
    }
    if s.holiday_allowance > 0 {
        println!("  Holiday allowance : {}", money(sym, s.holiday_allowance));
    }
    if s.weekly_holiday_pay > 0 {
        println!("  Weekly holiday pay: {}", money(sym, s.weekly_holiday_pay));
    }

    println!();
    println!("{}Work days:{} {}", CYAN, RESET, s.work_days);
    println!(
        "  Day     : {} ({}h)",
        s.day_shift_count,
        s.day_shift_count as f64 * rules.day_shift_hours
    );
    println!(
        "  Night   : {} ({}h)",
        s.night_shift_count,
        s.night_shift_count as f64 * rules.night_shift_hours
    );
    println!(
        "  Evening : {} ({}h)",
        s.evening_shift_count,
        s.evening_shift_count as f64 * rules.evening_shift_hours
    );
    println!("{}Off days:{} {}", CYAN, RESET, s.off_days);
}
