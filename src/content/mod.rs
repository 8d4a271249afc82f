//! Content unit model: the shared shape of page blocks and homepage sections, the two closed
//! type taxonomies, their typed payload schemas, and the content collaborators.

pub(crate) mod blocks;
pub(crate) mod kind;
pub mod payloads;
pub(crate) mod sections;
pub(crate) mod source;
pub(crate) mod unit;
