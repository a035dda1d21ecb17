//! Interactive screen.

mod input;
mod options;
mod text;

pub use text::print_help;

use crate::cli::prompts;
use crate::session::Session;
use crate::terminal::{clear, reset_terminal};

/// Run interactive mode.
pub fn run() {
    reset_terminal();
    clear();

    let mut session = Session::new();
    let result = options::main_loop(&mut session);

    reset_terminal();
    clear();

    if let Err(e) = result {
        prompts::error(&format!("Terminal error: {}", e));
        std::process::exit(1);
    }
}
