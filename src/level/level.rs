/// Minimum severity of messages that get logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Logs everything.
    Debug,
    /// Logs info, events, and errors.
    Info,
    /// Logs events and errors.
    Event,
    /// Silences all output.
    Disabled,
}

/// Severity carried by an individual record. Ordered for filtering:
/// an error record passes every threshold short of `Disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Event,
    Error,
}

impl Severity {
    /// Display tag used in both console and file output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Event => "event",
            Severity::Error => "error",
        }
    }
}

impl Level {
    /// Whether a record of the given severity is emitted at this threshold.
    pub fn allows(self, severity: Severity) -> bool {
        match self {
            Level::Debug => true,
            Level::Info => severity >= Severity::Info,
            Level::Event => severity >= Severity::Event,
            Level::Disabled => false,
        }
    }
}

/// Converts a string to a [`Level`], case-insensitively. Unrecognized
/// strings (including the empty string) resolve to [`Level::Disabled`]
/// rather than an error.
pub fn parse_level(s: &str) -> Level {
    match s.to_ascii_lowercase().as_str() {
        "debug" => Level::Debug,
        "info" => Level::Info,
        "event" => Level::Event,
        _ => Level::Disabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_known_strings() {
        let cases = [
            ("debug", Level::Debug),
            ("DEBUG", Level::Debug),
            ("info", Level::Info),
            ("Info", Level::Info),
            ("event", Level::Event),
            ("EVENT", Level::Event),
        ];
        for (input, want) in cases {
            assert_eq!(parse_level(input), want, "parse_level({input:?})");
        }
    }

    #[test]
    fn parse_level_unknown_strings_disable() {
        assert_eq!(parse_level("unknown"), Level::Disabled);
        assert_eq!(parse_level(""), Level::Disabled);
        assert_eq!(parse_level("warn"), Level::Disabled);
    }

    #[test]
    fn level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Event);
        assert!(Level::Event < Level::Disabled);
    }

    #[test]
    fn filtering_matrix() {
        assert!(Level::Debug.allows(Severity::Debug));
        assert!(Level::Info.allows(Severity::Info));
        assert!(!Level::Info.allows(Severity::Debug));
        assert!(Level::Event.allows(Severity::Event));
        assert!(Level::Event.allows(Severity::Error));
        assert!(!Level::Event.allows(Severity::Info));
        assert!(!Level::Disabled.allows(Severity::Error));
    }
}
