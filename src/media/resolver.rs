use url::Url;

use crate::foundation::error::{PageError, PageResult};

/// Turns a stored asset path into a displayable URL.
///
/// Implementations must be idempotent on URLs that are already absolute.
pub trait MediaResolver {
    /// `None` when there is nothing to display (blank path).
    fn resolve(&self, path: &str) -> Option<String>;
}

/// Returns paths unchanged (blank paths resolve to nothing).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityResolver;

impl MediaResolver for IdentityResolver {
    fn resolve(&self, path: &str) -> Option<String> {
        let p = path.trim();
        (!p.is_empty()).then(|| p.to_owned())
    }
}

/// Joins relative asset paths under a storage base URL.
#[derive(Clone, Debug)]
pub struct BaseUrlResolver {
    base: Url,
}

impl BaseUrlResolver {
    /// `base` must be an absolute `http(s)` URL; a trailing `/` is implied.
    pub fn new(base: &str) -> PageResult<Self> {
        let mut base = Url::parse(base.trim())
            .map_err(|e| PageError::validation(format!("media base URL '{base}': {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(PageError::validation(format!(
                "media base URL must be http(s), got '{}'",
                base.scheme()
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl MediaResolver for BaseUrlResolver {
    fn resolve(&self, path: &str) -> Option<String> {
        let p = path.trim();
        if p.is_empty() {
            return None;
        }
        if is_absolute(p) {
            return Some(p.to_owned());
        }
        // Stored paths are relative to the storage root even when they start with '/'.
        let rel = p.trim_start_matches('/');
        match self.base.join(rel) {
            Ok(u) => Some(u.into()),
            Err(e) => {
                tracing::debug!(path = p, error = %e, "media path does not join onto base");
                None
            }
        }
    }
}

/// Absolute `http(s)`, `data:`/`blob:` and protocol-relative URLs are left untouched.
pub(crate) fn is_absolute(p: &str) -> bool {
    if p.starts_with("//") {
        return true;
    }
    match Url::parse(p) {
        Ok(u) => matches!(u.scheme(), "http" | "https" | "data" | "blob"),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/resolver.rs"]
mod tests;
