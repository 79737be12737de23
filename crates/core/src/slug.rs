//! URL slug derivation for work items.
//!
//! Slugs are derived from the title (or an explicit override), lowercased,
//! with quote characters stripped and non-alphanumeric runs collapsed to a
//! single hyphen. Uniqueness is resolved by the caller against the database
//! by suffixing `-1`, `-2`, ... until an insert succeeds.

/// Derive a slug candidate from free-form input.
///
/// May return an empty string when the input contains no alphanumerics;
/// use [`base_slug`] for the fallback-applied variant.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.trim().to_lowercase().chars() {
        // Quote characters vanish entirely instead of becoming separators.
        if c == '\'' || c == '"' {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Derive the base slug for a work item, falling back to `work` when the
/// input yields nothing usable.
#[must_use]
pub fn base_slug(input: &str) -> String {
    let s = slugify(input);
    if s.is_empty() { "work".to_owned() } else { s }
}

/// The `n`th collision candidate for a base slug: the base itself for 0,
/// `base-n` afterwards.
#[must_use]
pub fn candidate(base: &str, n: u32) -> String {
    if n == 0 {
        base.to_owned()
    } else {
        format!("{base}-{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My Film!"), "my-film");
    }

    #[test]
    fn test_slugify_strips_quotes() {
        assert_eq!(slugify("Director's \"Cut\""), "directors-cut");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a --- b___c"), "a-b-c");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("  ---hello---  "), "hello");
    }

    #[test]
    fn test_slugify_non_ascii() {
        // Non-ASCII letters are treated as separators, same as punctuation.
        assert_eq!(slugify("café crème"), "caf-cr-me");
    }

    #[test]
    fn test_base_slug_fallback() {
        assert_eq!(base_slug("!!!"), "work");
        assert_eq!(base_slug(""), "work");
        assert_eq!(base_slug("My Film!"), "my-film");
    }

    #[test]
    fn test_candidate_suffixes() {
        assert_eq!(candidate("my-film", 0), "my-film");
        assert_eq!(candidate("my-film", 1), "my-film-1");
        assert_eq!(candidate("my-film", 2), "my-film-2");
    }
}
