use std::io::Write;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    /// Keeps log lines apart from an interactive board drawn on stdout.
    Stderr,
}

pub struct Logger {
    prefix: Option<String>,
    target: LogTarget,
}

impl Logger {
    fn new(prefix: Option<String>, target: LogTarget) -> Self {
        Self { prefix, target }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let text = self.format_line(file, line, message);
        // A closed pipe must not take the game down with it.
        let _ = match self.target {
            LogTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", text),
            LogTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", text),
        };
    }
}

pub fn init_logger(prefix: Option<String>, target: LogTarget) {
    LOGGER.get_or_init(|| Logger::new(prefix, target));
}

/// Messages sent before [`init_logger`] are dropped; library callers such as tests stay quiet.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_and_adds_prefix() {
        let logger = Logger::new(Some("Game".to_string()), LogTarget::Stderr);

        let text = logger.format_line("src/games/tictactoe/board.rs", 12, "hello");

        assert!(text.ends_with("[Game][board.rs:12] hello"), "{}", text);
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, LogTarget::Stdout);

        let text = logger.format_line("C:\\src\\main.rs", 3, "started");

        assert!(text.ends_with("[main.rs:3] started"), "{}", text);
    }
}
