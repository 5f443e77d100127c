//! Static translation dictionaries and lookup.

mod de;
mod en;
mod es;

use std::collections::HashMap;
use std::fmt::Display;

use comanda_common::Language;

/// A dictionary as compiled into the binary.
pub type Entries = &'static [(&'static str, &'static str)];

/// Per-language dictionaries with Spanish as the fallback language.
#[derive(Debug, Clone)]
pub struct Catalog {
    dictionaries: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl Catalog {
    /// The dictionaries shipped with the dashboard.
    pub fn builtin() -> Self {
        Self::from_entries([
            (Language::Es, es::ENTRIES),
            (Language::En, en::ENTRIES),
            (Language::De, de::ENTRIES),
        ])
    }

    /// Build a catalog from explicit dictionaries.
    pub fn from_entries<I>(dictionaries: I) -> Self
    where
        I: IntoIterator<Item = (Language, Entries)>,
    {
        Self {
            dictionaries: dictionaries
                .into_iter()
                .map(|(language, entries)| (language, entries.iter().copied().collect()))
                .collect(),
        }
    }

    /// Look a key up in one language only.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.dictionaries
            .get(&language)
            .and_then(|dictionary| dictionary.get(key))
            .copied()
    }

    /// Translate a key, falling back to Spanish and then to the key itself.
    pub fn translate(&self, language: Language, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| self.lookup(Language::Es, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate a key and fill its `{name}` placeholders.
    pub fn translate_with(
        &self,
        language: Language,
        key: &str,
        vars: &[(&str, &dyn Display)],
    ) -> String {
        interpolate(&self.translate(language, key), vars)
    }

    /// Keys defined for a language, in no particular order.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &'static str> + '_ {
        self.dictionaries
            .get(&language)
            .into_iter()
            .flat_map(|dictionary| dictionary.keys().copied())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('{')
}

/// Replace each `{name}` in `template` with the matching variable.
///
/// Placeholders without a matching variable are left as written.
pub fn interpolate(template: &str, vars: &[(&str, &dyn Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        if !is_placeholder_name(name) {
            out.push('{');
            rest = after;
            continue;
        }

        match vars.iter().find(|(var, _)| *var == name) {
            Some((_, value)) => out.push_str(&value.to_string()),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ES_ONLY: Entries = &[("greeting", "Hola"), ("only.es", "Solo en español")];
    const EN_PARTIAL: Entries = &[("greeting", "Hello")];

    #[test]
    fn test_every_english_key_exists_everywhere() {
        let catalog = Catalog::builtin();

        for key in catalog.keys(Language::En) {
            for language in Language::ALL {
                assert!(
                    catalog.lookup(language, key).is_some(),
                    "{key} missing for {language}"
                );
                assert_ne!(catalog.translate(language, key), key);
            }
        }
    }

    #[test]
    fn test_dictionaries_have_same_size() {
        let catalog = Catalog::builtin();
        let es = catalog.keys(Language::Es).count();

        assert!(es > 0);
        assert_eq!(catalog.keys(Language::En).count(), es);
        assert_eq!(catalog.keys(Language::De).count(), es);
    }

    #[test]
    fn test_fallback_to_spanish_then_key() {
        let catalog = Catalog::from_entries([(Language::Es, ES_ONLY), (Language::En, EN_PARTIAL)]);

        assert_eq!(catalog.translate(Language::En, "greeting"), "Hello");
        assert_eq!(catalog.translate(Language::En, "only.es"), "Solo en español");
        assert_eq!(catalog.translate(Language::De, "greeting"), "Hola");
        assert_eq!(catalog.translate(Language::En, "nowhere"), "nowhere");
    }

    #[test]
    fn test_interpolate() {
        let count = 3;
        assert_eq!(
            interpolate("{count} pedidos en mesa {table}", &[("count", &count), ("table", &"7")]),
            "3 pedidos en mesa 7"
        );
        assert_eq!(interpolate("Hola {name}", &[]), "Hola {name}");
        assert_eq!(interpolate("{a} y {a}", &[("a", &1)]), "1 y 1");
    }

    #[test]
    fn test_interpolate_punctuated_names() {
        assert_eq!(
            interpolate("Hola {first-name}", &[("first-name", &"Ana")]),
            "Hola Ana"
        );
        assert_eq!(
            interpolate("Total: {order.total} ({tip %})", &[("order.total", &"12,50 €"), ("tip %", &10)]),
            "Total: 12,50 € (10)"
        );
    }

    #[test]
    fn test_interpolate_odd_braces() {
        assert_eq!(interpolate("open { only", &[("only", &1)]), "open { only");
        assert_eq!(interpolate("{}", &[]), "{}");
        assert_eq!(interpolate("{x {y}", &[("y", &2)]), "{x 2");
        assert_eq!(interpolate("unterminated {y", &[("y", &2)]), "unterminated {y");
    }

    #[test]
    fn test_translate_with_builtin() {
        let catalog = Catalog::builtin();
        let count = 4;

        assert_eq!(
            catalog.translate_with(Language::En, "orders.itemsCount", &[("count", &count)]),
            "4 items"
        );
        assert_eq!(
            catalog.translate_with(Language::De, "tables.tableNumber", &[("number", &12)]),
            "Tisch 12"
        );
    }
}
