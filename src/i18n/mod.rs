//! Locale resolution for bilingual content fields and built-in interface labels.

pub(crate) mod labels;
pub(crate) mod resolve;
