// src/application/ports/util.rs

/// Text to url slug: lowercase ASCII words joined by hyphens.
/// Implementations must be deterministic and idempotent.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
