use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// ASCII-only rules and no colour.
    pub plain_mode: bool,
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Returns `true` when a message of this kind should be suppressed.
pub fn is_muted(kind: MessageKind) -> bool {
    current_preferences().quiet_mode && kind == MessageKind::Info
}

/// Formats a message with its label and, outside plain mode, a colour.
pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Info => text,
        MessageKind::Warning => format!("WARNING: {text}"),
        MessageKind::Error => format!("ERROR: {text}"),
    };

    if current_preferences().plain_mode {
        return base;
    }

    match kind {
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

/// Dims secondary text such as days outside the viewed month.
pub fn dimmed(text: &str) -> String {
    if current_preferences().plain_mode {
        text.to_string()
    } else {
        text.dimmed().to_string()
    }
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", styled(MessageKind::Error, message));
}
