//! shiftplanner main entrypoint.

use shiftplanner::run;
use shiftplanner::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
