use quiz_core::model::HistoryEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryLineVm {
    pub label: String,
}

impl From<&HistoryEntry> for HistoryLineVm {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            label: entry.to_string(),
        }
    }
}

#[must_use]
pub fn map_history_lines(entries: &[HistoryEntry]) -> Vec<HistoryLineVm> {
    entries.iter().map(HistoryLineVm::from).collect()
}
