use crate::entropy::{self, SecureRng};
use crate::pass::{MAX_LENGTH, MIN_LENGTH, Strength, charset};
use crate::session::{MagicState, Session};
use crate::terminal::{
    DIM, GREEN, RED, RESET, UNDERLINE, box_bottom, box_line, box_opt, box_rule, box_split, box_top,
    format_number,
};

pub fn print_help() {
    box_top("magicpass");
    box_line("Password generator with magic-word masking and undo history.");
    box_rule();
    box_line("Usage: magicpass [flags]   (no flags: interactive screen)");
    box_opt("-l, --length N", &format!("Password length, {MIN_LENGTH} to {MAX_LENGTH} (default {MIN_LENGTH})"));
    box_opt("-n, --number N", "Number of passwords (default 1)");
    box_opt("    --no-special", &format!("Letters and digits only, no {}", charset::PUNCTUATION));
    box_opt("-m, --magic WORD", "Print a magic-word variant of WORD (8+ chars, 4+ letters)");
    box_opt("-s, --strength", "Print entropy and strength after each password");
    box_opt("-b, --board", "Copy output to the clipboard");
    box_opt("-q, --quiet", "Suppress warnings and confirmations");
    box_opt("-h, --help", "Show this help");
    box_opt("-v, --version", "Show version");
    box_rule();
    box_line("Interactive keys");
    box_opt("Enter, g", "Generate (masks the remembered word in Magic Word mode)");
    box_opt("e", "Edit the password in place; Enter or Esc to finish");
    box_opt("c", "Copy the password to the clipboard");
    box_opt("p", "Toggle punctuation");
    box_opt("+ / -", "Change length");
    box_opt("m", "Toggle Magic Word (restores when turned off)");
    box_opt("r", "Restore the remembered password");
    box_opt("u, Ctrl+Z", "Undo");
    box_opt("U, Ctrl+Y", "Redo");
    box_opt("q, Esc", "Quit");
    box_rule();
    box_line(&format!("Randomness: {}", entropy::source_name()));
    box_line("Log level: MAGICPASS_LOG=debug (stderr)");
    box_bottom();
}

/// Value line with the edit cursor underlined, red when over the limit.
pub fn render_value(value: &str, cursor: Option<usize>, danger: bool) -> String {
    let color = if danger { RED } else { "" };
    let Some(cursor) = cursor else {
        return format!("{color}{value}{RESET}");
    };

    let chars: Vec<char> = value.chars().collect();
    let split = cursor.min(chars.len());
    let before: String = chars[..split].iter().collect();
    let at = chars.get(split).copied().unwrap_or(' ');
    let after: String = chars
        .get(split + 1..)
        .map(|rest| rest.iter().collect())
        .unwrap_or_default();

    format!("{color}{before}{UNDERLINE}{at}{RESET}{color}{after}{RESET}")
}

fn render_strength(strength: Strength) -> String {
    let color = match strength.label {
        "Weak" => RED,
        "Fair" => "",
        _ => GREEN,
    };
    format!("{:.1} bits ({color}{}{RESET})", strength.bits, strength.label)
}

fn magic_label(state: MagicState, can_magic: bool) -> &'static str {
    match state {
        MagicState::Off if can_magic => "off",
        MagicState::Off => "unavailable",
        MagicState::Armed => "on",
        MagicState::Applied => "on (applied)",
    }
}

pub fn print_screen<R: SecureRng>(session: &Session<R>, editing: Option<usize>) {
    let history = session.history();
    let position = history.cursor().map_or(0, |c| c + 1);

    box_top("magicpass");
    box_line(session.info());
    box_rule();
    box_split(
        &format!(
            "Password: {}",
            render_value(session.value(), editing, session.over_limit())
        ),
        &format!("#{}", format_number(session.edits())),
    );
    box_line(&format!("Strength: {}", render_strength(session.strength())));
    box_rule();

    let length = if session.length_locked() {
        format!("Length: {} {DIM}(locked){RESET}", session.length())
    } else {
        format!("Length: {} [+/-]", session.length())
    };
    let punct = format!(
        "Punctuation: {} [p]",
        if session.use_punctuation() { "on" } else { "off" }
    );
    box_split(&length, &punct);

    let restore = if session.remembered().is_some() {
        "Restore [r]".to_string()
    } else {
        format!("{DIM}Restore [r]{RESET}")
    };
    box_split(
        &format!("Magic Word: {} [m]", magic_label(session.magic(), session.can_magic())),
        &restore,
    );

    let undo = if history.can_back() { "[u] undo" } else { "" };
    let redo = if history.can_forward() { "[U] redo" } else { "" };
    let summary = if history.is_empty() {
        "History: empty".to_string()
    } else {
        format!("History: {}/{}", position, history.len())
    };
    box_split(&summary, &format!("{undo} {redo}"));
    box_bottom();

    if editing.is_some() {
        println!("  {DIM}Editing: type to change, [Enter]/[Esc] done, Ctrl+Z undo{RESET}");
    } else {
        println!("  {DIM}[Enter] generate  [e] edit  [c] copy  [?] help  [q] quit{RESET}");
    }
}
