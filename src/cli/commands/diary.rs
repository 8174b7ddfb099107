use crate::cli::commands::open_planner;
use crate::cli::parser::{Commands, DiaryAction};
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::models::shift_date::ShiftDate;
use crate::ui::messages::{info, success};
use crate::utils::describe_shift;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Diary { action } = cmd else {
        return Ok(());
    };

    match action {
        DiaryAction::Set { date, text } => {
            let d = ShiftDate::parse(date)?;
            let mut planner = open_planner(cfg)?;
            planner.set_diary(d, text.as_str())?;

            success(format!("Diary saved for {}", d));
            ttlog_soft(
                planner.store().conn(),
                "diary",
                &d.to_string(),
                &format!("Saved {} characters", text.chars().count()),
            );
        }

        DiaryAction::Show { date } => {
            let d = ShiftDate::parse(date)?;
            let planner = open_planner(cfg)?;

            println!("📅 {} ({})", d, d.weekday());
            println!("Shift: {}", describe_shift(planner.registry().shift_on(&d)));
            match planner.diary().get(&d) {
                Some(text) => println!("\n{}", text),
                None => info(format!("No diary entry for {}", d)),
            }
        }

        DiaryAction::Remove { date } => {
            let d = ShiftDate::parse(date)?;
            let mut planner = open_planner(cfg)?;

            if planner.remove_diary(&d)?.is_some() {
                success(format!("Diary entry for {} removed", d));
                ttlog_soft(planner.store().conn(), "diary", &d.to_string(), "Removed");
            } else {
                info(format!("No diary entry for {}", d));
            }
        }
    }

    Ok(())
}
