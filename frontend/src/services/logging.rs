use std::cell::Cell;

use shared::LogLevel;

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = const { Cell::new(LogLevel::Info) };
}

/// Console logger tagged with the emitting component.
pub struct Logger;

impl Logger {
    /// Set the lowest level that still reaches the console.
    pub fn set_level(level: LogLevel) {
        MIN_LEVEL.with(|min| min.set(level));
    }

    pub fn level() -> LogLevel {
        MIN_LEVEL.with(|min| min.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, message, component);
    }

    fn log(level: LogLevel, message: &str, component: &str) {
        if level < Self::level() {
            return;
        }

        let line = format_line(component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}
