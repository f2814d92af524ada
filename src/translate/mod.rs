//! Translation layer
//!
//! Two directions are involved: user-typed Spanish ingredients are mapped to
//! English locally ([`dictionary`]), and English recipe titles coming back
//! from the backend are translated remotely ([`translator`], [`mymemory`]).

pub mod dictionary;
pub mod key;
#[cfg(test)]
pub mod mock;
pub mod mymemory;
pub mod translator;

pub use mymemory::MyMemoryClient;
pub use translator::{
    CachedTranslator, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, Translation, TranslationApi,
};
