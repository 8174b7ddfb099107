pub mod diary;
pub mod pattern_group;
pub mod preset;
pub mod salary;
pub mod salary_rules;
pub mod shift_date;
pub mod shift_type;
