use std::io::Read;

use serde::{Deserialize, Serialize};
use url::Url;

/// One language edition of the encyclopedia.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub language: String,
    pub local_name: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Editions {
    editions: Vec<Edition>,
}

// English name, local name, subdomain; ordered by article count.
const BUILTIN: &[(&str, &str, &str)] = &[
    ("English", "English", "en"),
    ("Cebuano", "Sinugboanong Binisaya", "ceb"),
    ("German", "Deutsch", "de"),
    ("Swedish", "Svenska", "sv"),
    ("French", "Français", "fr"),
    ("Dutch", "Nederlands", "nl"),
    ("Russian", "Русский", "ru"),
    ("Spanish", "Español", "es"),
    ("Italian", "Italiano", "it"),
    ("Egyptian Arabic", "مصرى", "arz"),
    ("Polish", "Polski", "pl"),
    ("Japanese", "日本語", "ja"),
    ("Chinese", "中文", "zh"),
    ("Vietnamese", "Tiếng Việt", "vi"),
    ("Waray", "Winaray", "war"),
    ("Ukrainian", "Українська", "uk"),
    ("Arabic", "العربية", "ar"),
    ("Portuguese", "Português", "pt"),
    ("Persian", "فارسی", "fa"),
    ("Catalan", "Català", "ca"),
    ("Serbian", "Српски / srpski", "sr"),
    ("Indonesian", "Bahasa Indonesia", "id"),
    ("Korean", "한국어", "ko"),
    ("Norwegian (Bokmål)", "Norsk (bokmål)", "no"),
    ("Chechen", "Нохчийн", "ce"),
    ("Finnish", "Suomi", "fi"),
    ("Turkish", "Türkçe", "tr"),
    ("Czech", "Čeština", "cs"),
    ("Hungarian", "Magyar", "hu"),
    ("Tatar", "Татарча / tatarça", "tt"),
    ("Romanian", "Română", "ro"),
    ("Serbo-Croatian", "Srpskohrvatski / српскохрватски", "sh"),
    ("Basque", "Euskara", "eu"),
    ("Malay", "Bahasa Melayu", "ms"),
    ("Esperanto", "Esperanto", "eo"),
    ("Hebrew", "עברית", "he"),
    ("Armenian", "Հայերեն", "hy"),
    ("Danish", "Dansk", "da"),
    ("Bulgarian", "Български", "bg"),
    ("Welsh", "Cymraeg", "cy"),
    ("Slovak", "Slovenčina", "sk"),
    ("Greek", "Ελληνικά", "el"),
    ("Hindi", "हिन्दी", "hi"),
    ("Latin", "Latina", "la"),
    ("Thai", "ไทย", "th"),
    ("Croatian", "Hrvatski", "hr"),
    ("Lithuanian", "Lietuvių", "lt"),
    ("Slovenian", "Slovenščina", "sl"),
    ("Estonian", "Eesti", "et"),
    ("Galician", "Galego", "gl"),
];

impl Editions {
    pub fn new(editions: Vec<Edition>) -> Self { Self { editions } }

    /// The fifty largest editions.
    pub fn builtin() -> Self {
        let editions = BUILTIN
            .iter()
            .map(|(language, local_name, code)| Edition { language: language.to_string(), local_name: local_name.to_string(), code: code.to_string() })
            .collect();
        Self { editions }
    }

    /// Reads a JSON array of `{language, local_name, code}` objects.
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> { serde_json::from_reader(reader) }

    /// Case-insensitive match against the English name, the local name or the code.
    pub fn lookup(&self, query: &str) -> Option<&Edition> {
        let q = query.trim().to_lowercase();
        self.editions
            .iter()
            .find(|e| [&e.language, &e.local_name, &e.code].iter().any(|f| f.to_lowercase() == q))
    }

    pub fn len(&self) -> usize { self.editions.len() }

    pub fn is_empty(&self) -> bool { self.editions.is_empty() }
}

pub fn base_url(code: &str) -> Result<Url, url::ParseError> { Url::parse(&format!("https://{}.wikipedia.org", code.trim())) }
