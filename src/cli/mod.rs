//! One-shot command line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode and exit with the matching status on failure.
pub fn run(args: Vec<String>) {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());

    if let Err(e) = result {
        log::debug!("cli failed: {:?}", e);
        prompts::error(&e.to_string());
        if e.exit_code() == 2 {
            prompts::try_help();
        }
        std::process::exit(e.exit_code());
    }
}
