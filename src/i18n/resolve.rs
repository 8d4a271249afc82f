use crate::foundation::core::Locale;

/// Pick the text to display for one bilingual field.
///
/// The translated value wins only when the secondary locale is requested and the translation is
/// non-blank; otherwise the primary value is returned. Missing values normalize to `""`.
pub fn resolve(locale: Locale, primary: Option<&str>, translated: Option<&str>) -> String {
    match translated {
        Some(t) if locale.is_secondary() && !t.trim().is_empty() => t.to_owned(),
        _ => primary.unwrap_or_default().to_owned(),
    }
}

/// [`resolve`] over owned optional fields, the shape payload schemas carry.
pub fn resolve_field(locale: Locale, primary: &Option<String>, translated: &Option<String>) -> String {
    resolve(locale, primary.as_deref(), translated.as_deref())
}

/// Resolve a pair of parallel string lists (e.g. `features` / `featuresEn`) element-wise.
///
/// Each entry falls back independently; a shorter translated list leaves the tail untranslated.
pub fn resolve_list(locale: Locale, primary: &[String], translated: &[String]) -> Vec<String> {
    primary
        .iter()
        .enumerate()
        .map(|(i, p)| resolve(locale, Some(p), translated.get(i).map(String::as_str)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/i18n/resolve.rs"]
mod tests;
