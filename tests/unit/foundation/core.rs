use super::*;

#[test]
fn millis_from_secs_rounds_and_rejects_junk() {
    assert_eq!(Millis::from_secs_f64(8.0), Some(Millis(8000)));
    assert_eq!(Millis::from_secs_f64(2.4996), Some(Millis(2500)));
    assert_eq!(Millis::from_secs_f64(0.0), None);
    assert_eq!(Millis::from_secs_f64(-3.0), None);
    assert_eq!(Millis::from_secs_f64(f64::NAN), None);
    assert_eq!(Millis::from_secs_f64(f64::INFINITY), None);
}

#[test]
fn millis_add_saturates() {
    assert_eq!(Millis(u64::MAX) + Millis(1), Millis(u64::MAX));
    assert_eq!(Millis(5) + Millis(7), Millis(12));
    assert_eq!(Millis(5).saturating_sub(Millis(7)), Millis::ZERO);
}

#[test]
fn locale_parses_region_tags() {
    assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("ID_id".parse::<Locale>().unwrap(), Locale::Id);
    assert!("fr".parse::<Locale>().is_err());
    assert!("".parse::<Locale>().is_err());
}

#[test]
fn locale_serde_uses_lowercase_codes() {
    assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    let l: Locale = serde_json::from_str("\"id\"").unwrap();
    assert_eq!(l, Locale::PRIMARY);
    assert!(Locale::En.is_secondary());
    assert!(!Locale::Id.is_secondary());
}
