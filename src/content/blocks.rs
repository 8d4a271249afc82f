use serde_json::Value;

use crate::content::kind::{Taxonomy, canonical_tag, decode_as};
use crate::content::payloads::{
    AccordionPayload, AchievementsPayload, BrochurePayload, CalendarPayload, CardsPayload,
    ContactFormPayload, CurriculumPayload, DocumentListPayload, FacilityGalleryPayload,
    FaqPayload, FeaturePayload, FiguresPayload, GalleryPayload, GlobalStagePayload, HeroPayload,
    ImagePayload, LatestNewsPayload, MapPayload, NavigationGridPayload, OrgChartPayload,
    PartnershipsPayload, ProgramCardsPayload, TextPayload, TwoColumnPayload, VideoPayload,
};
use crate::render::failure::RenderError;

/// Free-form page block types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    HeroCarousel,
    Text,
    Image,
    TwoColumn,
    Accordion,
    Cards,
    GalleryCarousel,
    VideoSection,
    Faq,
    Figures,
    Partnerships,
    OrganizationChart,
    Achievements,
    CurriculumTable,
    Calendar,
    DocumentList,
    ContactForm,
    MapEmbed,
    Brochure,
    NavigationGrid,
    ProgramCards,
    FacilityGallery,
    GlobalStage,
    MasjidFeature,
    FeatureHighlight,
    VideoProfile,
    LatestNews,
}

impl BlockKind {
    /// Every block kind, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::HeroCarousel,
        Self::Text,
        Self::Image,
        Self::TwoColumn,
        Self::Accordion,
        Self::Cards,
        Self::GalleryCarousel,
        Self::VideoSection,
        Self::Faq,
        Self::Figures,
        Self::Partnerships,
        Self::OrganizationChart,
        Self::Achievements,
        Self::CurriculumTable,
        Self::Calendar,
        Self::DocumentList,
        Self::ContactForm,
        Self::MapEmbed,
        Self::Brochure,
        Self::NavigationGrid,
        Self::ProgramCards,
        Self::FacilityGallery,
        Self::GlobalStage,
        Self::MasjidFeature,
        Self::FeatureHighlight,
        Self::VideoProfile,
        Self::LatestNews,
    ];
}

/// Decoded page block payload.
#[derive(Clone, Debug)]
pub enum BlockPayload {
    HeroCarousel(HeroPayload),
    Text(TextPayload),
    Image(ImagePayload),
    TwoColumn(TwoColumnPayload),
    Accordion(AccordionPayload),
    Cards(CardsPayload),
    GalleryCarousel(GalleryPayload),
    VideoSection(VideoPayload),
    Faq(FaqPayload),
    Figures(FiguresPayload),
    Partnerships(PartnershipsPayload),
    OrganizationChart(OrgChartPayload),
    Achievements(AchievementsPayload),
    CurriculumTable(CurriculumPayload),
    Calendar(CalendarPayload),
    DocumentList(DocumentListPayload),
    ContactForm(ContactFormPayload),
    MapEmbed(MapPayload),
    Brochure(BrochurePayload),
    NavigationGrid(NavigationGridPayload),
    ProgramCards(ProgramCardsPayload),
    FacilityGallery(FacilityGalleryPayload),
    GlobalStage(GlobalStagePayload),
    MasjidFeature(FeaturePayload),
    FeatureHighlight(FeaturePayload),
    VideoProfile(VideoPayload),
    LatestNews(LatestNewsPayload),
}

impl Taxonomy for BlockKind {
    type Payload = BlockPayload;

    const FAMILY: &'static str = "block";

    fn from_tag(tag: &str) -> Option<Self> {
        let kind = match canonical_tag(tag).as_str() {
            "hero-carousel" | "hero" | "carousel" | "hero-slider" => Self::HeroCarousel,
            "text" | "rich-text" | "paragraph" => Self::Text,
            "image" => Self::Image,
            "two-column" | "two-columns" | "text-image" => Self::TwoColumn,
            "accordion" => Self::Accordion,
            "cards" => Self::Cards,
            "gallery-carousel" | "gallery" => Self::GalleryCarousel,
            "video-section" | "video" => Self::VideoSection,
            "faq" | "faqs" => Self::Faq,
            "figures" => Self::Figures,
            "partnerships" | "partners" => Self::Partnerships,
            "organization-chart" | "org-chart" | "organization-structure" => {
                Self::OrganizationChart
            }
            "achievements" => Self::Achievements,
            "curriculum-table" | "curriculum" => Self::CurriculumTable,
            "calendar" | "academic-calendar" | "events" => Self::Calendar,
            "document-list" | "documents" | "downloads" => Self::DocumentList,
            "contact-form" => Self::ContactForm,
            "map-embed" | "map" => Self::MapEmbed,
            "brochure" => Self::Brochure,
            "navigation-grid" | "nav-grid" | "quick-links" => Self::NavigationGrid,
            "program-cards" | "programs" => Self::ProgramCards,
            "facility-gallery" | "facilities" => Self::FacilityGallery,
            "global-stage" => Self::GlobalStage,
            "masjid-feature" | "masjid" => Self::MasjidFeature,
            "feature-highlight" | "feature" => Self::FeatureHighlight,
            "video-profile" => Self::VideoProfile,
            "latest-news" | "news" => Self::LatestNews,
            _ => return None,
        };
        Some(kind)
    }

    fn tag(self) -> &'static str {
        match self {
            Self::HeroCarousel => "hero-carousel",
            Self::Text => "text",
            Self::Image => "image",
            Self::TwoColumn => "two-column",
            Self::Accordion => "accordion",
            Self::Cards => "cards",
            Self::GalleryCarousel => "gallery-carousel",
            Self::VideoSection => "video-section",
            Self::Faq => "faq",
            Self::Figures => "figures",
            Self::Partnerships => "partnerships",
            Self::OrganizationChart => "organization-chart",
            Self::Achievements => "achievements",
            Self::CurriculumTable => "curriculum-table",
            Self::Calendar => "calendar",
            Self::DocumentList => "document-list",
            Self::ContactForm => "contact-form",
            Self::MapEmbed => "map-embed",
            Self::Brochure => "brochure",
            Self::NavigationGrid => "navigation-grid",
            Self::ProgramCards => "program-cards",
            Self::FacilityGallery => "facility-gallery",
            Self::GlobalStage => "global-stage",
            Self::MasjidFeature => "masjid-feature",
            Self::FeatureHighlight => "feature-highlight",
            Self::VideoProfile => "video-profile",
            Self::LatestNews => "latest-news",
        }
    }

    fn groupable(self) -> bool {
        matches!(self, Self::VideoProfile)
    }

    fn list_field(self) -> Option<&'static str> {
        let field = match self {
            Self::HeroCarousel => "slides",
            Self::Accordion | Self::Faq | Self::Figures | Self::Achievements => "items",
            Self::NavigationGrid | Self::GlobalStage => "items",
            Self::Cards => "cards",
            Self::GalleryCarousel => "images",
            Self::Partnerships => "partners",
            Self::OrganizationChart => "members",
            Self::CurriculumTable => "rows",
            Self::Calendar => "events",
            Self::DocumentList => "documents",
            Self::ContactForm => "fields",
            Self::ProgramCards => "programs",
            Self::FacilityGallery => "facilities",
            Self::MasjidFeature | Self::FeatureHighlight => "features",
            Self::Text
            | Self::Image
            | Self::TwoColumn
            | Self::VideoSection
            | Self::MapEmbed
            | Self::Brochure
            | Self::VideoProfile
            | Self::LatestNews => return None,
        };
        Some(field)
    }

    fn hero(payload: &BlockPayload) -> Option<&HeroPayload> {
        match payload {
            BlockPayload::HeroCarousel(p) => Some(p),
            _ => None,
        }
    }

    fn decode(self, payload: Value) -> Result<BlockPayload, RenderError> {
        let p = match self {
            Self::HeroCarousel => BlockPayload::HeroCarousel(decode_as(payload)?),
            Self::Text => BlockPayload::Text(decode_as(payload)?),
            Self::Image => BlockPayload::Image(decode_as(payload)?),
            Self::TwoColumn => BlockPayload::TwoColumn(decode_as(payload)?),
            Self::Accordion => BlockPayload::Accordion(decode_as(payload)?),
            Self::Cards => BlockPayload::Cards(decode_as(payload)?),
            Self::GalleryCarousel => BlockPayload::GalleryCarousel(decode_as(payload)?),
            Self::VideoSection => BlockPayload::VideoSection(decode_as(payload)?),
            Self::Faq => BlockPayload::Faq(decode_as(payload)?),
            Self::Figures => BlockPayload::Figures(decode_as(payload)?),
            Self::Partnerships => BlockPayload::Partnerships(decode_as(payload)?),
            Self::OrganizationChart => BlockPayload::OrganizationChart(decode_as(payload)?),
            Self::Achievements => BlockPayload::Achievements(decode_as(payload)?),
            Self::CurriculumTable => BlockPayload::CurriculumTable(decode_as(payload)?),
            Self::Calendar => BlockPayload::Calendar(decode_as(payload)?),
            Self::DocumentList => BlockPayload::DocumentList(decode_as(payload)?),
            Self::ContactForm => BlockPayload::ContactForm(decode_as(payload)?),
            Self::MapEmbed => BlockPayload::MapEmbed(decode_as(payload)?),
            Self::Brochure => BlockPayload::Brochure(decode_as(payload)?),
            Self::NavigationGrid => BlockPayload::NavigationGrid(decode_as(payload)?),
            Self::ProgramCards => BlockPayload::ProgramCards(decode_as(payload)?),
            Self::FacilityGallery => BlockPayload::FacilityGallery(decode_as(payload)?),
            Self::GlobalStage => BlockPayload::GlobalStage(decode_as(payload)?),
            Self::MasjidFeature => BlockPayload::MasjidFeature(decode_as(payload)?),
            Self::FeatureHighlight => BlockPayload::FeatureHighlight(decode_as(payload)?),
            Self::VideoProfile => BlockPayload::VideoProfile(decode_as(payload)?),
            Self::LatestNews => BlockPayload::LatestNews(decode_as(payload)?),
        };
        Ok(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/blocks.rs"]
mod tests;
