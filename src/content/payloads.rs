//! Typed payload schemas, one per content type.
//!
//! Every user-facing string has an optional `<field>En` companion. List fields go through
//! the lenient helpers in `payload::lenient` because stored content mixes arrays and JSON-encoded strings.

use serde::Deserialize;
use serde_json::Value;

use crate::payload::lenient;

/// Title/subtitle pair shared by most payloads.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub subtitle_en: Option<String>,
}

/// Gallery image: a bare URL string or an object with caption.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryImage {
    pub url: Option<String>,
    pub caption: Option<String>,
    pub caption_en: Option<String>,
}

impl<'de> Deserialize<'de> for GalleryImage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Obj {
            #[serde(default, alias = "image", alias = "src", alias = "imageUrl")]
            url: Option<String>,
            #[serde(default, alias = "alt", alias = "title")]
            caption: Option<String>,
            #[serde(default, alias = "altEn", alias = "titleEn")]
            caption_en: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Url(String),
            Obj(Obj),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Url(url) => Ok(Self {
                url: Some(url),
                ..Self::default()
            }),
            Repr::Obj(o) => Ok(Self {
                url: o.url,
                caption: o.caption,
                caption_en: o.caption_en,
            }),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPayload {
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub slides: Vec<HeroSlide>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, alias = "description", deserialize_with = "lenient::opt_text")]
    pub subtitle: Option<String>,
    #[serde(default, alias = "descriptionEn", deserialize_with = "lenient::opt_text")]
    pub subtitle_en: Option<String>,
    #[serde(default, alias = "imageUrl", alias = "backgroundImage")]
    pub image: Option<String>,
    #[serde(default, alias = "videoBackground", alias = "bgVideo")]
    pub background_video: Option<String>,
    /// Declared background video length, in seconds.
    #[serde(default, alias = "duration", deserialize_with = "lenient::opt_f64")]
    pub video_duration: Option<f64>,
    /// External video opened by the play button.
    #[serde(default, alias = "youtubeUrl")]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub button_text_en: Option<String>,
    #[serde(default, alias = "buttonUrl")]
    pub button_link: Option<String>,
    #[serde(
        default = "lenient::default_true",
        deserialize_with = "lenient::flag_default_true"
    )]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "body", deserialize_with = "lenient::opt_text")]
    pub content: Option<String>,
    #[serde(default, alias = "bodyEn", deserialize_with = "lenient::opt_text")]
    pub content_en: Option<String>,
    #[serde(default)]
    pub alignment: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    #[serde(default, alias = "url", alias = "src", alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub alt_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub caption_en: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "body", deserialize_with = "lenient::opt_text")]
    pub content: Option<String>,
    #[serde(default, alias = "bodyEn", deserialize_with = "lenient::opt_text")]
    pub content_en: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    /// `"left"` or `"right"` (default).
    #[serde(default)]
    pub image_position: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub button_text_en: Option<String>,
    #[serde(default, alias = "buttonUrl")]
    pub button_link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub items: Vec<AccordionItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItem {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub content_en: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, alias = "url", alias = "href")]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub images: Vec<GalleryImage>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default, alias = "url", alias = "youtubeUrl")]
    pub video_url: Option<String>,
    #[serde(default, alias = "image", alias = "thumbnailUrl")]
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "faqs", deserialize_with = "lenient::seq")]
    pub items: Vec<FaqItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub question_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub answer_en: Option<String>,
}

/// Notable people (figures) and testimonials share one schema.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiguresPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(
        default,
        alias = "figures",
        alias = "testimonials",
        deserialize_with = "lenient::seq"
    )]
    pub items: Vec<Figure>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, alias = "position", deserialize_with = "lenient::opt_text")]
    pub role: Option<String>,
    #[serde(default, alias = "positionEn", deserialize_with = "lenient::opt_text")]
    pub role_en: Option<String>,
    #[serde(default, alias = "photo", alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default, alias = "testimonial", deserialize_with = "lenient::opt_text")]
    pub quote: Option<String>,
    #[serde(default, alias = "testimonialEn", deserialize_with = "lenient::opt_text")]
    pub quote_en: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipsPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub partners: Vec<Partner>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, alias = "image", alias = "logoUrl")]
    pub logo: Option<String>,
    #[serde(default, alias = "link", alias = "website")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgChartPayload {
    #[serde(flatten)]
    pub heading: Heading,
    /// Optional pre-drawn chart image shown above the member list.
    #[serde(default, alias = "chartImage")]
    pub image: Option<String>,
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub members: Vec<OrgMember>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgMember {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, alias = "role", deserialize_with = "lenient::opt_text")]
    pub position: Option<String>,
    #[serde(default, alias = "roleEn", deserialize_with = "lenient::opt_text")]
    pub position_en: Option<String>,
    #[serde(default, alias = "photo")]
    pub image: Option<String>,
    /// Hierarchy level, 0 at the top. Missing levels sort after every numbered level.
    #[serde(default, deserialize_with = "lenient::opt_usize")]
    pub level: Option<usize>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "achievements", deserialize_with = "lenient::seq")]
    pub items: Vec<Achievement>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub category_en: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "headers", deserialize_with = "lenient::seq_text")]
    pub columns: Vec<String>,
    #[serde(default, alias = "headersEn", deserialize_with = "lenient::seq_text")]
    pub columns_en: Vec<String>,
    /// Rows of scalar cells; each row may itself be a JSON-encoded array.
    #[serde(default, deserialize_with = "lenient::seq")]
    pub rows: Vec<Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub events: Vec<CalendarEvent>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, alias = "startDate", deserialize_with = "lenient::opt_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub location_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(
        default,
        alias = "items",
        alias = "files",
        deserialize_with = "lenient::seq"
    )]
    pub documents: Vec<Document>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, alias = "url", alias = "file")]
    pub file_url: Option<String>,
    #[serde(default, alias = "type")]
    pub file_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub size: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub address_en: Option<String>,
    /// Field names to show; defaults to name, email, message.
    #[serde(default, deserialize_with = "lenient::seq_text")]
    pub fields: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub submit_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub submit_text_en: Option<String>,
    /// Submission endpoint; the form posts to the host's default when absent.
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "url", alias = "mapUrl", alias = "src")]
    pub embed_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub address_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_usize")]
    pub height: Option<usize>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrochurePayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default, alias = "url", alias = "pdfUrl")]
    pub file_url: Option<String>,
    #[serde(default, alias = "image", alias = "cover")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub button_text_en: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationGridPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "links", deserialize_with = "lenient::seq")]
    pub items: Vec<NavItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    #[serde(default, alias = "title", deserialize_with = "lenient::opt_text")]
    pub label: Option<String>,
    #[serde(default, alias = "titleEn", deserialize_with = "lenient::opt_text")]
    pub label_en: Option<String>,
    #[serde(default, alias = "link", alias = "url")]
    pub href: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCardsPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub programs: Vec<Program>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default, alias = "title", deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, alias = "titleEn", deserialize_with = "lenient::opt_text")]
    pub name_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default, alias = "url")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq_text")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient::seq_text")]
    pub features_en: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityGalleryPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub facilities: Vec<Facility>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    #[serde(default, alias = "title", deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, alias = "titleEn", deserialize_with = "lenient::opt_text")]
    pub name_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub images: Vec<GalleryImage>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStagePayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default, alias = "backgroundImage")]
    pub image: Option<String>,
    #[serde(default, alias = "events", deserialize_with = "lenient::seq")]
    pub items: Vec<StageItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageItem {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub country_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub year: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Masjid and feature-highlight blocks: an image beside a list of highlighted features.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default)]
    pub image_position: Option<String>,
    #[serde(default, alias = "items", deserialize_with = "lenient::seq")]
    pub features: Vec<FeatureItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestNewsPayload {
    #[serde(flatten)]
    pub heading: Heading,
    /// Overrides the strategy's default list length.
    #[serde(default, deserialize_with = "lenient::opt_usize")]
    pub limit: Option<usize>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub category: Option<String>,
    #[serde(default, alias = "viewAllUrl")]
    pub view_all_link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToActionPayload {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub button_text_en: Option<String>,
    #[serde(default, alias = "buttonUrl")]
    pub button_link: Option<String>,
    #[serde(default, alias = "backgroundImage")]
    pub image: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/content/payloads.rs"]
mod tests;
