pub mod calculator;
pub mod expander;
pub mod export;
pub mod log;
pub mod planner;
pub mod registry;
pub mod store;
