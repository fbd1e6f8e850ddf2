pub mod classifier;
pub mod dictionary;
pub mod processor;

pub use classifier::classify;
pub use dictionary::KanjiDictionary;
pub use processor::JapaneseProcessor;
