//! hubdeck main entrypoint.

use hubdeck::run;
use hubdeck::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
