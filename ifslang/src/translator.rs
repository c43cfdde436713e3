//! Label translation backends.
//!
//! A [`Translator`] turns a batch of source labels into a [`TranslationMap`]
//! for one target culture. The encoders only ever see the resulting map, so
//! any backend can be plugged in. Two are provided:
//!
//! - [`DictionaryTranslator`]: built-in ERP term tables, optionally replaced by
//!   a project dictionary at `<dir>/dictionary/<culture>.json`.
//! - [`CachingTranslator`]: memoizes any other backend per culture.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use lazy_static::lazy_static;

use crate::{error::Error, types::TranslationMap};

/// Cultures with a display name, in the order they are offered to users.
pub const LANGUAGE_NAMES: [(&str, &str); 11] = [
    ("sv-SE", "Swedish"),
    ("nb-NO", "Norwegian Bokmål"),
    ("da-DK", "Danish"),
    ("fi-FI", "Finnish"),
    ("de-DE", "German"),
    ("fr-FR", "French"),
    ("es-ES", "Spanish"),
    ("it-IT", "Italian"),
    ("nl-NL", "Dutch"),
    ("pt-PT", "Portuguese"),
    ("pl-PL", "Polish"),
];

pub fn supported_languages() -> Vec<&'static str> {
    LANGUAGE_NAMES.iter().map(|(culture, _)| *culture).collect()
}

pub fn language_name(culture: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == culture)
        .map(|(_, name)| *name)
}

/// A source of label translations.
///
/// Implementations must return an entry for every input text; a text the
/// backend cannot translate maps to itself.
pub trait Translator {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    fn translate(&self, texts: &[String], culture: &str) -> Result<TranslationMap, Error>;

    /// Translates one text, falling back to the text itself.
    fn translate_one(&self, text: &str, culture: &str) -> Result<String, Error> {
        let map = self.translate(&[text.to_string()], culture)?;
        Ok(map.translate(text).to_string())
    }
}

lazy_static! {
    static ref SWEDISH_TERMS: HashMap<&'static str, &'static str> = HashMap::from([
        ("Branch No", "Filialnummer"),
        ("EAN", "EAN"),
        ("Technical Description", "Teknisk beskrivning"),
        ("Sales UOM", "Försäljnings-enhet"),
        ("Package Measurement", "Paketmått"),
        ("Min Order Qty", "Min orderkvantitet"),
        ("List Price", "Listpris"),
        ("Discount (%)", "Rabatt (%)"),
        ("Stored Article", "Lagrad artikel"),
        ("Product URL", "Produkt-URL"),
        ("Account Reference", "Kontoreferens"),
        ("Security Sheet", "Säkerhetsdatablad"),
        ("Environmental Classification", "Miljöklassificering"),
        ("Cross Reference", "Korsreferens"),
        ("Supplier's Product Category 2", "Leverantörens produktkategori 2"),
        ("Statistic Group", "Statistikgrupp"),
        ("Part Synonym", "Artikelsynonym"),
        ("Environmental Details", "Miljödetaljer"),
        ("C Actual Cost", "Verklig kostnad"),
        ("C Actual Revenue", "Verklig intäkt"),
        ("Actual Cost", "Verklig kostnad"),
        ("Actual Revenue", "Verklig intäkt"),
    ]);
    static ref NORWEGIAN_TERMS: HashMap<&'static str, &'static str> = HashMap::from([
        ("Branch No", "Filialnummer"),
        ("EAN", "EAN"),
        ("Technical Description", "Teknisk beskrivelse"),
        ("Sales UOM", "Salgsenhet"),
        ("Package Measurement", "Pakkemål"),
        ("Min Order Qty", "Min bestillingsmengde"),
        ("List Price", "Listepris"),
        ("Discount (%)", "Rabatt (%)"),
        ("Stored Article", "Lagret artikkel"),
        ("Product URL", "Produkt-URL"),
        ("Account Reference", "Kontoreferanse"),
        ("Security Sheet", "Sikkerhetsdatablad"),
        ("Environmental Classification", "Miljøklassifisering"),
        ("Cross Reference", "Kryssreferanse"),
        ("Supplier's Product Category 2", "Leverandørens produktkategori 2"),
        ("Statistic Group", "Statistikkgruppe"),
        ("Part Synonym", "Artikkelsynonym"),
        ("Environmental Details", "Miljødetaljer"),
        ("C Actual Cost", "Faktisk kostnad"),
        ("C Actual Revenue", "Faktisk inntekt"),
        ("Actual Cost", "Faktisk kostnad"),
        ("Actual Revenue", "Faktisk inntekt"),
    ]);
}

/// Built-in terms for `culture`, empty for cultures without a table.
pub fn builtin_terms(culture: &str) -> HashMap<String, String> {
    let table = match culture {
        "sv-SE" => &*SWEDISH_TERMS,
        "nb-NO" => &*NORWEGIAN_TERMS,
        _ => return HashMap::new(),
    };
    table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Term-table translator.
///
/// With a dictionary directory set, terms for a culture come from
/// `<dir>/dictionary/<culture>.json` (a flat JSON object). A missing,
/// unreadable, malformed or empty file falls back to the built-in table.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTranslator {
    dictionary_dir: Option<PathBuf>,
}

impl DictionaryTranslator {
    pub fn new() -> Self {
        DictionaryTranslator::default()
    }

    pub fn with_dictionary_dir<P: Into<PathBuf>>(dir: P) -> Self {
        DictionaryTranslator {
            dictionary_dir: Some(dir.into()),
        }
    }

    pub fn dictionary_dir(&self) -> Option<&Path> {
        self.dictionary_dir.as_deref()
    }

    /// Path of the project dictionary for `culture`, if a directory is configured.
    pub fn dictionary_path(&self, culture: &str) -> Option<PathBuf> {
        self.dictionary_dir
            .as_ref()
            .map(|dir| dir.join("dictionary").join(format!("{}.json", culture)))
    }

    fn load_dictionary_file(&self, culture: &str) -> Result<HashMap<String, String>, Error> {
        let Some(path) = self.dictionary_path(culture) else {
            return Ok(HashMap::new());
        };
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&path)?;
        let terms: HashMap<String, String> = serde_json::from_str(&content)?;
        Ok(terms)
    }

    /// The term table used for `culture`.
    pub fn terms(&self, culture: &str) -> HashMap<String, String> {
        let terms = match self.load_dictionary_file(culture) {
            Ok(terms) => terms,
            Err(e) => {
                tracing::warn!(culture, error = %e, "ignoring unreadable project dictionary");
                HashMap::new()
            }
        };
        if terms.is_empty() {
            builtin_terms(culture)
        } else {
            terms
        }
    }
}

impl Translator for DictionaryTranslator {
    fn name(&self) -> &str {
        "dictionary"
    }

    fn translate(&self, texts: &[String], culture: &str) -> Result<TranslationMap, Error> {
        let terms = self.terms(culture);
        Ok(texts
            .iter()
            .map(|text| {
                let translated = terms.get(text).cloned().unwrap_or_else(|| text.clone());
                (text.clone(), translated)
            })
            .collect())
    }
}

/// Append-only per-culture memo in front of another backend.
///
/// Only texts not yet cached for a culture are sent to the inner backend.
#[derive(Debug, Default)]
pub struct CachingTranslator<T> {
    inner: T,
    cache: Mutex<HashMap<String, TranslationMap>>,
}

impl<T: Translator> CachingTranslator<T> {
    pub fn new(inner: T) -> Self {
        CachingTranslator {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Number of cached entries for `culture`.
    pub fn cached_len(&self, culture: &str) -> usize {
        self.cache
            .lock()
            .map(|cache| cache.get(culture).map_or(0, TranslationMap::len))
            .unwrap_or(0)
    }
}

impl<T: Translator> Translator for CachingTranslator<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn translate(&self, texts: &[String], culture: &str) -> Result<TranslationMap, Error> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| Error::translation_error(format!("translation cache poisoned: {}", e), None))?;
        let entry = cache.entry(culture.to_string()).or_default();

        let missing: Vec<String> = texts
            .iter()
            .filter(|text| !entry.contains(text))
            .cloned()
            .collect();
        if !missing.is_empty() {
            let fresh = self.inner.translate(&missing, culture)?;
            for text in &missing {
                entry.insert(text.clone(), fresh.translate(text).to_string());
            }
        }

        Ok(texts
            .iter()
            .map(|text| (text.clone(), entry.translate(text).to_string()))
            .collect())
    }
}
