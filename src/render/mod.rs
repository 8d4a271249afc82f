//! Renderer Registry / Dispatcher: maps each unit's kind to its strategy, isolates per-unit
//! failures into visible fallbacks, and produces the visual tree.

pub(crate) mod context;
pub(crate) mod dispatch;
pub(crate) mod failure;
pub(crate) mod node;
pub(crate) mod strategies;

pub use failure::RenderError;
