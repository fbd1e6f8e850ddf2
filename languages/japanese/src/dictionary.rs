use std::collections::HashMap;
use std::sync::LazyLock;

use yomu_core::dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata};

const fn entry(
    readings: &'static [&'static str],
    meanings: &'static [&'static str],
) -> DictionaryEntry {
    DictionaryEntry { readings, meanings }
}

// On'yomi in katakana first, then kun'yomi in hiragana.
const KANJI: &[(char, DictionaryEntry)] = &[
    ('日', entry(&["ニチ", "ジツ", "ひ", "か"], &["day", "sun", "Japan"])),
    ('本', entry(&["ホン", "もと"], &["book", "origin", "main", "true"])),
    ('語', entry(&["ゴ", "かたる"], &["word", "speech", "language"])),
    ('人', entry(&["ジン", "ニン", "ひと"], &["person"])),
    ('水', entry(&["スイ", "みず"], &["water"])),
    ('火', entry(&["カ", "ひ"], &["fire"])),
    ('木', entry(&["モク", "ボク", "き"], &["tree", "wood"])),
    ('金', entry(&["キン", "コン", "かね"], &["gold", "money", "metal"])),
    ('土', entry(&["ド", "ト", "つち"], &["soil", "earth", "ground"])),
    ('月', entry(&["ゲツ", "ガツ", "つき"], &["moon", "month"])),
    ('山', entry(&["サン", "やま"], &["mountain"])),
    ('川', entry(&["セン", "かわ"], &["river"])),
    ('大', entry(&["ダイ", "タイ", "おおきい"], &["big", "large"])),
    ('小', entry(&["ショウ", "ちいさい", "こ"], &["small", "little"])),
    ('中', entry(&["チュウ", "なか"], &["middle", "inside", "center"])),
    ('上', entry(&["ジョウ", "うえ", "のぼる"], &["above", "up"])),
    ('下', entry(&["カ", "ゲ", "した", "くだる"], &["below", "down"])),
    ('一', entry(&["イチ", "イツ", "ひと"], &["one"])),
    ('二', entry(&["ニ", "ふた"], &["two"])),
    ('三', entry(&["サン", "み"], &["three"])),
    ('四', entry(&["シ", "よん", "よ"], &["four"])),
    ('五', entry(&["ゴ", "いつ"], &["five"])),
    ('六', entry(&["ロク", "む"], &["six"])),
    ('七', entry(&["シチ", "なな"], &["seven"])),
    ('八', entry(&["ハチ", "や"], &["eight"])),
    ('九', entry(&["キュウ", "ク", "ここの"], &["nine"])),
    ('十', entry(&["ジュウ", "とお"], &["ten"])),
    ('百', entry(&["ヒャク"], &["hundred"])),
    ('千', entry(&["セン", "ち"], &["thousand"])),
    ('万', entry(&["マン", "バン"], &["ten thousand"])),
    ('円', entry(&["エン", "まる"], &["yen", "circle"])),
    ('年', entry(&["ネン", "とし"], &["year"])),
    ('時', entry(&["ジ", "とき"], &["time", "hour"])),
    ('今', entry(&["コン", "キン", "いま"], &["now"])),
    ('先', entry(&["セン", "さき"], &["previous", "ahead"])),
    ('生', entry(&["セイ", "ショウ", "いきる", "うまれる", "なま"], &["life", "birth", "raw"])),
    ('学', entry(&["ガク", "まなぶ"], &["study", "learning", "science"])),
    ('校', entry(&["コウ"], &["school"])),
    ('子', entry(&["シ", "ス", "こ"], &["child"])),
    ('女', entry(&["ジョ", "ニョ", "おんな"], &["woman", "female"])),
    ('男', entry(&["ダン", "ナン", "おとこ"], &["man", "male"])),
    ('国', entry(&["コク", "くに"], &["country"])),
    ('車', entry(&["シャ", "くるま"], &["car", "vehicle"])),
    ('電', entry(&["デン"], &["electricity"])),
    ('気', entry(&["キ", "ケ"], &["spirit", "mind", "air"])),
    ('天', entry(&["テン", "あめ"], &["heaven", "sky"])),
    ('雨', entry(&["ウ", "あめ"], &["rain"])),
    ('花', entry(&["カ", "はな"], &["flower"])),
    ('見', entry(&["ケン", "みる"], &["see", "look"])),
    ('行', entry(&["コウ", "ギョウ", "いく"], &["go", "conduct"])),
    ('来', entry(&["ライ", "くる"], &["come"])),
    ('食', entry(&["ショク", "たべる"], &["eat", "food"])),
    ('飲', entry(&["イン", "のむ"], &["drink"])),
    ('言', entry(&["ゲン", "ゴン", "いう"], &["say", "word"])),
    ('話', entry(&["ワ", "はなし", "はなす"], &["talk", "story"])),
    ('書', entry(&["ショ", "かく"], &["write"])),
    ('読', entry(&["ドク", "よむ"], &["read"])),
    ('東', entry(&["トウ", "ひがし"], &["east"])),
    ('西', entry(&["セイ", "サイ", "にし"], &["west"])),
    ('南', entry(&["ナン", "みなみ"], &["south"])),
    ('北', entry(&["ホク", "きた"], &["north"])),
    ('出', entry(&["シュツ", "でる"], &["exit", "leave"])),
    ('入', entry(&["ニュウ", "はいる", "いる"], &["enter"])),
    ('名', entry(&["メイ", "ミョウ", "な"], &["name"])),
    ('字', entry(&["ジ", "あざ"], &["character", "letter"])),
    ('漢', entry(&["カン"], &["China", "Han"])),
    ('文', entry(&["ブン", "モン", "ふみ"], &["sentence", "literature"])),
    ('手', entry(&["シュ", "て"], &["hand"])),
    ('目', entry(&["モク", "め"], &["eye"])),
    ('口', entry(&["コウ", "ク", "くち"], &["mouth"])),
    ('耳', entry(&["ジ", "みみ"], &["ear"])),
    ('心', entry(&["シン", "こころ"], &["heart", "mind"])),
    ('愛', entry(&["アイ"], &["love", "affection"])),
];

static INDEX: LazyLock<HashMap<char, DictionaryEntry>> = LazyLock::new(|| {
    let index: HashMap<char, DictionaryEntry> = KANJI.iter().copied().collect();
    tracing::debug!("Indexed {} embedded kanji entries", index.len());
    index
});

/// Kanji dictionary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct KanjiDictionary;

impl KanjiDictionary {
    pub fn embedded() -> Self {
        Self
    }

    pub fn entry_count(&self) -> usize {
        INDEX.len()
    }
}

impl Dictionary for KanjiDictionary {
    fn lookup_exact(&self, character: char) -> Option<&DictionaryEntry> {
        INDEX.get(&character)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Embedded kanji".to_string(),
            version: "1.0".to_string(),
            language: "ja".to_string(),
            entry_count: self.entry_count(),
        }
    }
}
