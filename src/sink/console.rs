use super::{Record, Sink};
use colored::Colorize;
use std::io::{self, Write};

/// Renders records as `<epoch-secs> <colored code> <message>` lines.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }
}

impl Sink for ConsoleSink {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        match &record.error {
            Some(error) => writeln!(
                self.out,
                "{} {} {} {}",
                record.time,
                format_level(record.level),
                record.message,
                format!("error={error}").red(),
            )?,
            None => writeln!(
                self.out,
                "{} {} {}",
                record.time,
                format_level(record.level),
                record.message,
            )?,
        }
        self.out.flush()
    }
}

/// Maps a severity tag to its colored three-letter code. Unrecognized tags
/// come back uppercased and uncolored.
pub fn format_level(tag: &str) -> String {
    match tag {
        "event" => "EVT".white().to_string(),
        "info" => "INF".green().to_string(),
        "debug" => "DBG".cyan().to_string(),
        "error" => "ERR".red().to_string(),
        "warn" => "WRN".yellow().to_string(),
        other => other.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_short_codes() {
        assert!(format_level("event").contains("EVT"));
        assert!(format_level("info").contains("INF"));
        assert!(format_level("debug").contains("DBG"));
        assert!(format_level("error").contains("ERR"));
        assert!(format_level("warn").contains("WRN"));
    }

    #[test]
    fn unknown_tags_are_uppercased_uncolored() {
        assert_eq!(format_level("trace"), "TRACE");
        assert_eq!(format_level(""), "");
    }
}
