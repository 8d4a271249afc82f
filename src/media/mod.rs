//! Media collaborators: asset URL resolution and hosted-video id extraction.

pub(crate) mod resolver;
pub(crate) mod video;
