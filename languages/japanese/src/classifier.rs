//! Script classification of single code points.

use yomu_types::Category;

/// CJK Unified Ideographs main block, U+4E00..U+9FAF
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FAF}').contains(&c)
}

/// Full Hiragana block (U+3040..U+309F), including its unassigned code points
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Full Katakana block (U+30A0..U+30FF), including ゠ and ヿ
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn classify(c: char) -> Category {
    if is_kanji(c) {
        Category::Kanji
    } else if is_hiragana(c) {
        Category::Hiragana
    } else if is_katakana(c) {
        Category::Katakana
    } else {
        Category::Other
    }
}
