use crate::content::unit::UnitId;
use crate::foundation::core::Locale;
use crate::i18n::labels::Label;
use crate::render::node::{Node, el};

/// Why a single content unit could not be rendered.
///
/// Produced either at the assembly boundary (payload normalization, typed decode) or by a
/// rendering strategy. Always converted into a [`RenderFallback`]; never propagated past the unit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("payload does not match schema: {0}")]
    Decode(String),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// Visible placeholder for a unit whose rendering failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFallback {
    pub id: UnitId,
    pub type_tag: String,
    pub message: String,
}

impl RenderFallback {
    pub fn new(id: &UnitId, type_tag: &str, err: &RenderError) -> Self {
        Self {
            id: id.clone(),
            type_tag: type_tag.to_owned(),
            message: err.to_string(),
        }
    }

    pub fn to_node(&self, locale: Locale) -> Node {
        el("div")
            .class("render-fallback")
            .attr("role", "alert")
            .attr("data-unit-id", self.id.0.clone())
            .attr("data-unit-type", self.type_tag.clone())
            .child(el("strong").text(Label::RenderError.text(locale)))
            .child(el("p").text(format!("{} ({})", self.type_tag, self.id)))
            .child(el("code").text(self.message.clone()))
            .into()
    }
}
