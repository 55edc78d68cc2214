//! Interactive session UI components.

use crate::ui::Style;

use super::repl::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - English ⇄ Nepali Translation",
        Style::header("anuvad"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}         {}",
        Style::label("to"),
        config.to.map_or_else(
            || Style::secondary("(detected per input)"),
            Style::value
        )
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}    {}",
        Style::command("/flip"),
        Style::secondary("Swap translation direction")
    );
    println!(
        "  {}     {}",
        Style::command("/set"),
        Style::secondary("Change a setting: /set to <en|ne|auto>, /set model <name>")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Exit interactive mode")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
