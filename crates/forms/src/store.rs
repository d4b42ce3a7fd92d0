use api_types::RecordId;

/// Records from the last search, in the order the API returned them.
///
/// Edit triggers carry only an identity; the full record is looked up here.
#[derive(Debug)]
pub(crate) struct RecordStore<R> {
    entries: Vec<(RecordId, R)>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R> RecordStore<R> {
    pub(crate) fn replace(&mut self, entries: impl IntoIterator<Item = (RecordId, R)>) {
        self.entries = entries.into_iter().collect();
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn get(&self, id: RecordId) -> Option<&R> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, record)| record)
    }

    pub(crate) fn records(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|(_, record)| record)
    }
}
