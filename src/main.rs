//! greedfear main entrypoint.

use greedfear::run;
use greedfear::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
