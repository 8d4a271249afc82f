//! Payload Normalizer: turns the loosely-typed `payload` of a content unit into a structured
//! JSON value exactly once, at the page-assembly boundary.

pub(crate) mod lenient;
pub(crate) mod normalize;
