use std::{fmt, sync::LazyLock};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub static GLOBAL_TRANSLATION_CACHE: LazyLock<DashMap<Language, Value>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "locales"]
pub struct Locales;

/// Languages the site is translated into.
///
/// Any code other than `fr` resolves to English, so a request or stored
/// preference carrying an unknown language never fails to deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Self::Fr,
            _ => Self::En,
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn load_table(language: Language) -> Value {
    let file = format!("{}.json", language.code());
    let Some(content) = Locales::get(&file) else {
        log::warn!("missing translation table {file}");
        return Value::Null;
    };
    serde_json::from_slice(&content.data).unwrap_or_else(|e| {
        log::warn!("couldn't parse translation table {file}: {e}");
        Value::Null
    })
}

/// Looks up a dotted key (`contact.title`) in the table for `language`.
///
/// A key that is missing, or that names an object instead of a string,
/// comes back unchanged.
pub fn translate(language: Language, key: &str) -> String {
    let cache = &*GLOBAL_TRANSLATION_CACHE;
    let table = cache
        .entry(language)
        .or_insert_with(|| load_table(language));
    key.split('.')
        .try_fold(table.value(), |node, part| node.get(part))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Like [`translate`], then fills `{name}` style placeholders.
pub fn translate_args(language: Language, key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(translate(language, key), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(&key, v, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn test_lookup_nested_key() {
        assert_eq!(translate(Language::En, "contact.sending"), "Sending...");
        assert_eq!(translate(Language::Fr, "contact.sending"), "Envoi...");
        assert_eq!(
            translate(Language::Fr, "closeAllProjects"),
            "Fermer Tous les Projets"
        );
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(translate(Language::En, "contact.nope"), "contact.nope");
        assert_eq!(translate(Language::Fr, "nope"), "nope");
        // an object is not a displayable string
        assert_eq!(translate(Language::En, "contact"), "contact");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            translate_args(Language::En, "email.confirmationSubject", &[("name", "Alice")]),
            "Thank you for contacting me, Alice!"
        );
        assert_eq!(
            translate_args(Language::Fr, "email.greeting", &[("name", "Alice")]),
            "Bonjour Alice,"
        );
    }

    #[test]
    fn test_language_fallback() {
        assert_eq!(Language::from("de"), Language::En);
        assert_eq!(Language::from(""), Language::En);
        assert_eq!(Language::from("FR"), Language::Fr);
        let parsed: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(parsed, Language::En);
        assert_eq!(serde_json::to_string(&Language::Fr).unwrap(), "\"fr\"");
    }

    #[test]
    fn test_every_key_in_every_language() {
        let mut tables = Language::ALL.iter().map(|lang| {
            let mut keys = Vec::new();
            leaf_keys("", &load_table(*lang), &mut keys);
            keys.sort();
            (*lang, keys)
        });
        let (_, reference) = tables.next().unwrap();
        assert!(!reference.is_empty());
        for (lang, keys) in tables {
            assert_eq!(keys, reference, "key mismatch for {lang}");
        }
    }
}
