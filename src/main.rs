//! Rendezvous main entrypoint.

use rendezvous::run;
use rendezvous::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
