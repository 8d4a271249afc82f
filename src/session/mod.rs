//! Page assembly: snapshots of fetched units, page rendering, and site configuration.

pub(crate) mod assemble;
pub(crate) mod config;
pub(crate) mod page;
