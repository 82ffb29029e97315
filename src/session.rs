//! Conversation history for one interactive session.

use chrono::{DateTime, Local, Utc};

/// One completed interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEntry {
    pub query: String,
    pub response: String,
    pub asked_at: DateTime<Utc>,
}

impl SessionEntry {
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
            asked_at: Utc::now(),
        }
    }

    /// Time the question was asked, as local `HH:MM` for display.
    pub fn asked_at_display(&self) -> String {
        self.asked_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// Completed interactions, most recent first. Lives only as long as the session.
#[derive(Debug, Default)]
pub struct ConversationSession {
    entries: Vec<SessionEntry>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry.
    pub fn record(&mut self, entry: SessionEntry) {
        self.entries.insert(0, entry);
    }

    /// All entries, most recent first.
    pub fn all(&self) -> &[SessionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entries_are_most_recent_first() {
        let mut session = ConversationSession::new();
        assert!(session.is_empty());

        for i in 1..=3 {
            session.record(SessionEntry::new(format!("q{}", i), format!("a{}", i)));
        }

        let queries: Vec<_> = session.all().iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["q3", "q2", "q1"]);
        assert_eq!(session.len(), 3);
        assert_eq!(session.all()[0].response, "a3");
    }

    #[test]
    fn test_asked_at_display() {
        let mut entry = SessionEntry::new("q", "a");
        entry.asked_at = Utc.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap();

        let expected = entry.asked_at.with_timezone(&Local).format("%H:%M").to_string();
        assert_eq!(entry.asked_at_display(), expected);
        assert_eq!(expected.len(), 5);
        assert_eq!(&expected[2..3], ":");
    }
}
