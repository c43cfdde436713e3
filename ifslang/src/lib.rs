#![forbid(unsafe_code)]
//! IFS language file toolkit for Rust.
//!
//! Reads an IFS translation-database XML export, keeps the customer-specific
//! (`C_`-prefixed) columns, and writes IFS Foundation language files:
//! a `.lng` definition file in the base language plus one `.trs` translation
//! file per target language. Generated and hand-written files can be checked
//! with the block validator.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ifslang::{Codec, DictionaryTranslator, validate_file};
//!
//! let codec = Codec::read_export("translationDb_ActivityEstimate-Cust.xml")?;
//! println!("{}", codec.statistics());
//!
//! let lng = codec.write_definition("out")?;
//! let map = codec.translate_labels(&DictionaryTranslator::new(), "sv-SE")?;
//! let trs = codec.write_translation("out", "sv-SE", &map)?;
//!
//! for path in [lng, trs] {
//!     println!("{}: {}", path.display(), validate_file(&path).summary());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # File formats
//!
//! - **`.lng`**: header plus CS/CE blocks with `A:Prompt^` lines and
//!   five-field `CS:` lines
//! - **`.trs`**: header with language and culture, `P:` original and
//!   `A:Prompt^` translated prompt per custom column, two-field `CS:` lines
//!
//! Both are UTF-8 without BOM, CRLF-terminated and tab-indented.

pub mod codec;
pub mod error;
pub mod formats;
pub mod naming;
pub mod statistics;
pub mod traits;
pub mod translator;
pub mod types;
pub mod validator;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{Codec, infer_kind_from_extension},
    error::Error,
    formats::FileKind,
    statistics::Statistics,
    traits::{Encoder, Parser},
    translator::{CachingTranslator, DictionaryTranslator, Translator},
    types::{Column, LogicalUnit, ResourceTree, TranslationMap, View},
    validator::{ValidationReport, validate_file},
};
