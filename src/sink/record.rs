use crate::level::Severity;
use chrono::Utc;
use serde::Serialize;

/// One structured log record. Serialized as a single JSON line for file
/// output; the console sink renders it as a human-readable colored line.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub level: &'static str,
    pub time: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Record {
    /// Stamps the record with the current time, epoch seconds.
    pub fn new(severity: Severity, message: String) -> Self {
        Self {
            level: severity.as_str(),
            time: Utc::now().timestamp(),
            message,
            error: None,
        }
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_error_field_when_absent() {
        let json = serde_json::to_string(&Record::new(Severity::Info, "[main] hi".into())).unwrap();
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"message\":\"[main] hi\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn serializes_error_field_when_present() {
        let record = Record::new(Severity::Error, "[main] boom".into())
            .with_error("disk full".into());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"error\":\"disk full\""));
    }
}
