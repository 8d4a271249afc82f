use serde_json::Value;

use crate::content::kind::{Taxonomy, canonical_tag, decode_as};
use crate::content::payloads::{
    AchievementsPayload, CallToActionPayload, FacilityGalleryPayload, FiguresPayload,
    HeroPayload, LatestNewsPayload, PartnershipsPayload, ProgramCardsPayload, TwoColumnPayload,
    VideoPayload,
};
use crate::render::failure::RenderError;

/// Fixed homepage section types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Welcome,
    Programs,
    Achievements,
    Facilities,
    News,
    Testimonials,
    Partners,
    VideoProfile,
    CallToAction,
}

impl SectionKind {
    pub const ALL: [Self; 10] = [
        Self::Hero,
        Self::Welcome,
        Self::Programs,
        Self::Achievements,
        Self::Facilities,
        Self::News,
        Self::Testimonials,
        Self::Partners,
        Self::VideoProfile,
        Self::CallToAction,
    ];
}

/// Decoded homepage section payload.
#[derive(Clone, Debug)]
pub enum SectionPayload {
    Hero(HeroPayload),
    Welcome(TwoColumnPayload),
    Programs(ProgramCardsPayload),
    Achievements(AchievementsPayload),
    Facilities(FacilityGalleryPayload),
    News(LatestNewsPayload),
    Testimonials(FiguresPayload),
    Partners(PartnershipsPayload),
    VideoProfile(VideoPayload),
    CallToAction(CallToActionPayload),
}

impl Taxonomy for SectionKind {
    type Payload = SectionPayload;

    const FAMILY: &'static str = "section";

    fn from_tag(tag: &str) -> Option<Self> {
        let kind = match canonical_tag(tag).as_str() {
            "hero" | "hero-carousel" | "hero-section" => Self::Hero,
            "welcome" | "about" | "sambutan" => Self::Welcome,
            "programs" | "program" => Self::Programs,
            "achievements" | "prestasi" => Self::Achievements,
            "facilities" | "fasilitas" => Self::Facilities,
            "news" | "latest-news" | "berita" => Self::News,
            "testimonials" | "testimoni" => Self::Testimonials,
            "partners" | "partnerships" => Self::Partners,
            "video-profile" | "profile-video" => Self::VideoProfile,
            "call-to-action" | "cta" => Self::CallToAction,
            _ => return None,
        };
        Some(kind)
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Welcome => "welcome",
            Self::Programs => "programs",
            Self::Achievements => "achievements",
            Self::Facilities => "facilities",
            Self::News => "news",
            Self::Testimonials => "testimonials",
            Self::Partners => "partners",
            Self::VideoProfile => "video-profile",
            Self::CallToAction => "call-to-action",
        }
    }

    fn groupable(self) -> bool {
        matches!(self, Self::VideoProfile)
    }

    fn list_field(self) -> Option<&'static str> {
        let field = match self {
            Self::Hero => "slides",
            Self::Programs => "programs",
            Self::Achievements | Self::Testimonials => "items",
            Self::Facilities => "facilities",
            Self::Partners => "partners",
            Self::Welcome | Self::News | Self::VideoProfile | Self::CallToAction => return None,
        };
        Some(field)
    }

    fn hero(payload: &SectionPayload) -> Option<&HeroPayload> {
        match payload {
            SectionPayload::Hero(p) => Some(p),
            _ => None,
        }
    }

    fn decode(self, payload: Value) -> Result<SectionPayload, RenderError> {
        let p = match self {
            Self::Hero => SectionPayload::Hero(decode_as(payload)?),
            Self::Welcome => SectionPayload::Welcome(decode_as(payload)?),
            Self::Programs => SectionPayload::Programs(decode_as(payload)?),
            Self::Achievements => SectionPayload::Achievements(decode_as(payload)?),
            Self::Facilities => SectionPayload::Facilities(decode_as(payload)?),
            Self::News => SectionPayload::News(decode_as(payload)?),
            Self::Testimonials => SectionPayload::Testimonials(decode_as(payload)?),
            Self::Partners => SectionPayload::Partners(decode_as(payload)?),
            Self::VideoProfile => SectionPayload::VideoProfile(decode_as(payload)?),
            Self::CallToAction => SectionPayload::CallToAction(decode_as(payload)?),
        };
        Ok(p)
    }
}
