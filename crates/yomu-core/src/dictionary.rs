/// Character dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Entry keyed by exactly this character
    fn lookup_exact(&self, character: char) -> Option<&DictionaryEntry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Readings and meanings for a single character, fixed at build time.
///
/// Readings keep their authored order; the order matters for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub readings: &'static [&'static str],
    pub meanings: &'static [&'static str],
}

impl DictionaryEntry {
    pub fn readings(&self) -> Vec<String> {
        self.readings.iter().map(|r| r.to_string()).collect()
    }

    pub fn meanings(&self) -> Vec<String> {
        self.meanings.iter().map(|m| m.to_string()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}
