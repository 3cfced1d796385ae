use serde::{Deserialize, Serialize};
use tracing::Level;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_out() -> String {
    "stdout".to_string()
}

/// Logger Configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationConfigLogger {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `stdout`, or a directory for daily rolling log files
    #[serde(default = "default_log_out")]
    pub out: String,
}

impl ApplicationConfigLogger {
    /// Returns the appropriate log level for tokio/tracing
    pub fn tracing_level(&self) -> Level {
        match self.level.to_lowercase().as_str() {
            "info" => Level::INFO,
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            _ => Level::ERROR,
        }
    }

    /// Env filter directives; HTTP stack internals stay quiet below trace
    pub fn env_filter(&self) -> &'static str {
        match self.tracing_level() {
            Level::TRACE => "trace",
            Level::DEBUG => "debug,hyper=off,rustls=off",
            Level::INFO => "info,hyper=off,rustls=off",
            Level::WARN => "warn,hyper=off,rustls=off",
            Level::ERROR => "error,hyper=off,rustls=off",
        }
    }

    /// Whether file and line numbers are included in log lines
    pub fn with_source_location(&self) -> bool {
        self.tracing_level() == Level::TRACE
    }

    pub fn is_stdout(&self) -> bool {
        self.out.eq_ignore_ascii_case("stdout")
    }
}

impl Default for ApplicationConfigLogger {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            out: default_log_out(),
        }
    }
}
