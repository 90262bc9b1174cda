use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// No colours, ASCII decorations only.
    pub plain_mode: bool,
    /// Skip separator lines.
    pub quiet_mode: bool,
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_output,
            quiet_mode: config.quiet,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    if prefs.plain_mode {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Renders a message the way [`print`] would, without writing it.
pub fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let rule = if prefs.plain_mode { "-" } else { "─" };

    let formatted = match kind {
        MessageKind::Section => format!("{}...", text.trim()),
        MessageKind::Separator => rule.repeat(40),
        MessageKind::Info => text,
        MessageKind::Success => text,
        MessageKind::Warning => format!("Warning: {text}"),
        MessageKind::Error => format!("Error: {text}"),
    };

    if prefs.plain_mode {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Separator | MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    if prefs.quiet_mode && kind == MessageKind::Separator {
        return;
    }
    let formatted = format_message(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}\n", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}

pub fn blank_line() {
    if !current_preferences().quiet_mode {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences {
        plain_mode: true,
        quiet_mode: false,
    };

    #[test]
    fn plain_messages_carry_no_escape_codes() {
        let rendered = format_message(MessageKind::Error, "file missing", &PLAIN);
        assert_eq!(rendered, "Error: file missing");
        assert_eq!(
            format_message(MessageKind::Separator, "", &PLAIN),
            "-".repeat(40)
        );
    }

    #[test]
    fn section_titles_trail_with_ellipsis() {
        assert_eq!(
            format_message(MessageKind::Section, " Calculating Trip Duration ", &PLAIN),
            "Calculating Trip Duration..."
        );
    }
}
