//! ponto main entrypoint.

use ponto::run;

fn main() {
    if let Err(e) = run() {
        ponto::ui::messages::error(e);
        std::process::exit(1);
    }
}
