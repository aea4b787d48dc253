use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Longest base slug; leaves room for numeric suffixes.
const MAX_BASE_SLUG_CHARS: usize = 80;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn generate_slug(&self, title: &str) -> String {
        slugify(title)
    }

    fn sanitize_slug(&self, candidate: &str) -> String {
        let mut out = String::with_capacity(candidate.len());
        for ch in candidate.chars().flat_map(char::to_lowercase) {
            let ch = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                ch
            } else {
                '-'
            };
            if ch == '-' && (out.is_empty() || out.ends_with('-')) {
                continue;
            }
            out.push(ch);
        }
        out.truncate(MAX_BASE_SLUG_CHARS);
        out.trim_end_matches('-').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_and_trims_dashes() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.sanitize_slug("--Brand__Identity--"), "brand-identity");
        assert_eq!(slugger.sanitize_slug("!!!"), "");
    }

    #[test]
    fn generate_transliterates_titles() {
        let slugger = DefaultSlugGenerator;
        let slug = slugger.sanitize_slug(&slugger.generate_slug("Café Branding & Web"));
        assert_eq!(slug, "cafe-branding-web");
    }

    #[test]
    fn long_titles_are_truncated() {
        let slugger = DefaultSlugGenerator;
        let slug = slugger.sanitize_slug(&"a".repeat(200));
        assert_eq!(slug.len(), MAX_BASE_SLUG_CHARS);
    }
}
