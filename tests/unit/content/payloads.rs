use super::*;
use serde_json::json;

#[test]
fn hero_accepts_items_alias_and_string_encoded_slides() {
    let p: HeroPayload = serde_json::from_value(json!({
        "items": "[{\"title\":\"Selamat Datang\",\"videoDuration\":\"8\",\"isActive\":0}]"
    }))
    .unwrap();
    assert_eq!(p.slides.len(), 1);
    assert_eq!(p.slides[0].title.as_deref(), Some("Selamat Datang"));
    assert_eq!(p.slides[0].video_duration, Some(8.0));
    assert!(!p.slides[0].is_active);
}

#[test]
fn hero_slide_defaults_to_active() {
    let s: HeroSlide = serde_json::from_value(json!({"image": "a.jpg"})).unwrap();
    assert!(s.is_active);
    assert_eq!(s.image.as_deref(), Some("a.jpg"));
}

#[test]
fn gallery_images_accept_strings_and_objects() {
    let p: GalleryPayload = serde_json::from_value(json!({
        "title": "Galeri",
        "images": ["a.jpg", {"image": "b.jpg", "caption": "B", "captionEn": "Bee"}]
    }))
    .unwrap();
    assert_eq!(p.heading.title.as_deref(), Some("Galeri"));
    assert_eq!(
        p.images[0],
        GalleryImage {
            url: Some("a.jpg".to_owned()),
            ..GalleryImage::default()
        }
    );
    assert_eq!(p.images[1].url.as_deref(), Some("b.jpg"));
    assert_eq!(p.images[1].caption_en.as_deref(), Some("Bee"));
}

#[test]
fn gallery_rejects_non_image_entries() {
    let r = serde_json::from_value::<GalleryPayload>(json!({"images": [42]}));
    assert!(r.is_err());
}

#[test]
fn heading_is_flattened_and_tolerates_numbers() {
    let p: TextPayload =
        serde_json::from_value(json!({"title": 2025, "titleEn": "Year", "body": "Isi"})).unwrap();
    assert_eq!(p.heading.title.as_deref(), Some("2025"));
    assert_eq!(p.heading.title_en.as_deref(), Some("Year"));
    assert_eq!(p.content.as_deref(), Some("Isi"));
}

#[test]
fn program_features_accept_json_string_lists() {
    let p: ProgramCardsPayload = serde_json::from_value(json!({
        "programs": [{"title": "Tahfidz", "features": "[\"30 Juz\", \"Sanad\"]"}]
    }))
    .unwrap();
    assert_eq!(p.programs[0].name.as_deref(), Some("Tahfidz"));
    assert_eq!(p.programs[0].features, vec!["30 Juz", "Sanad"]);
}

#[test]
fn testimonials_alias_maps_onto_figures() {
    let p: FiguresPayload = serde_json::from_value(json!({
        "testimonials": [{"name": "Aisyah", "testimonial": "Luar biasa", "position": "Alumni"}]
    }))
    .unwrap();
    assert_eq!(p.items[0].quote.as_deref(), Some("Luar biasa"));
    assert_eq!(p.items[0].role.as_deref(), Some("Alumni"));
}
