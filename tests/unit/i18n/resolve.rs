use super::*;
use proptest::prelude::*;

#[test]
fn secondary_locale_prefers_translation() {
    assert_eq!(resolve(Locale::En, Some("Beranda"), Some("Home")), "Home");
    assert_eq!(resolve(Locale::Id, Some("Beranda"), Some("Home")), "Beranda");
}

#[test]
fn blank_translation_falls_back_even_when_requested() {
    assert_eq!(resolve(Locale::En, Some("Beranda"), None), "Beranda");
    assert_eq!(resolve(Locale::En, Some("Beranda"), Some("")), "Beranda");
    assert_eq!(resolve(Locale::En, Some("Beranda"), Some("   ")), "Beranda");
}

#[test]
fn absent_inputs_normalize_to_empty() {
    assert_eq!(resolve(Locale::En, None, None), "");
    assert_eq!(resolve(Locale::Id, None, Some("Home")), "");
}

#[test]
fn fields_resolve_independently() {
    let title = (Some("Judul".to_owned()), Some("Title".to_owned()));
    let body = (Some("Isi".to_owned()), None);
    assert_eq!(resolve_field(Locale::En, &title.0, &title.1), "Title");
    assert_eq!(resolve_field(Locale::En, &body.0, &body.1), "Isi");
}

#[test]
fn list_resolution_falls_back_per_entry() {
    let primary = vec!["Satu".to_owned(), "Dua".to_owned(), "Tiga".to_owned()];
    let translated = vec!["One".to_owned(), String::new()];
    assert_eq!(
        resolve_list(Locale::En, &primary, &translated),
        vec!["One", "Dua", "Tiga"]
    );
    assert_eq!(resolve_list(Locale::Id, &primary, &translated), primary);
}

proptest! {
    #[test]
    fn missing_translation_always_yields_primary(primary in ".*", blank in "[ \t]{0,4}") {
        for locale in [Locale::Id, Locale::En] {
            prop_assert_eq!(resolve(locale, Some(&primary), None), primary.clone());
            prop_assert_eq!(resolve(locale, Some(&primary), Some(&blank)), primary.clone());
        }
    }

    #[test]
    fn primary_locale_never_shows_translation(primary in ".*", translated in ".+") {
        prop_assert_eq!(resolve(Locale::Id, Some(&primary), Some(&translated)), primary);
    }
}
