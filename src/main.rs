use std::env;

mod cli;
mod clipboard;
mod entropy;
mod error;
mod exits;
mod history;
mod pass;
mod session;
mod settings;
mod terminal;
mod tui;

fn init_logging() {
    let env = env_logger::Env::new().filter_or("MAGICPASS_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() {
    init_logging();
    exits::reset_terminal();
    exits::install_handlers();
    exits::harden_process();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if cli::quiet::is_interactive() => tui::run(),
        _ => cli::run(args),
    }
}
