//! Translation lookup with ordered fallback.
//!
//! A [`Translator`] resolves a key against a primary bundle, then a default
//! bundle, and finally returns the key itself.

pub mod bundle;
pub mod translator;

pub use bundle::{Bundle, TranslationError};
pub use translator::Translator;
