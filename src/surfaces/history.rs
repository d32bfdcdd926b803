use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Session-unique, increasing; usable as a render key.
    pub seq: u64,
    pub command: String,
    pub response: Option<String>,
    /// Localized wall-clock time captured when the entry was added.
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn response_text(&self) -> &str {
        self.response.as_deref().unwrap_or("")
    }
}

/// Command log, newest first. Grows for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    next_seq: u64,
}

impl HistoryLog {
    pub fn record(
        &mut self,
        command: String,
        response: Option<String>,
        timestamp: String,
    ) -> &HistoryEntry {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push_front(HistoryEntry {
            seq,
            command,
            response,
            timestamp,
        });
        &self.entries[0]
    }

    /// Newest entry first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
