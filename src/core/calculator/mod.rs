pub mod daily;
pub mod monthly;

pub use daily::calculate_daily_salary;
pub use monthly::{calculate_monthly_salary, daily_breakdown};
