//! Ordering & Filtering Pipeline. Deterministic and idempotent: the same unit collection always
//! yields the same layout sequence.

pub(crate) mod arrange;
