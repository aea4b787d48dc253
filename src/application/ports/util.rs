// src/application/ports/util.rs
/// Title-to-slug formatting. `generate_slug` does the coarse transliteration,
/// `sanitize_slug` enforces the final URL-safe shape (possibly empty).
pub trait SlugGenerator: Send + Sync {
    fn generate_slug(&self, title: &str) -> String;
    fn sanitize_slug(&self, candidate: &str) -> String;
}
