use yomu_types::{Category, LookupResult};

/// Character classification and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Assign a script category to one code point
    fn classify(&self, character: char) -> Category;

    /// Look up every character of `text`, in input order
    fn lookup(&self, text: &str) -> LookupResult;
}
