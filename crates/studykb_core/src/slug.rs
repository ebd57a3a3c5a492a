//! Topic title to directory-name normalization.
//!
//! # Invariants
//! - Output contains only `[a-z0-9-]`.
//! - Output never starts or ends with `-` and never contains `--`.
//! - `slugify(slugify(x)) == slugify(x)`.

/// Converts free-text into a filesystem-safe identifier.
///
/// Lowercases the input, keeps ASCII letters and digits, and collapses every
/// run of other characters into one hyphen. Empty input yields an empty slug.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for c in value.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("React  Hooks -- useEffect!"), "react-hooks-useeffect");
    }

    #[test]
    fn strips_edge_separators() {
        assert_eq!(slugify("  ...CI/CD pipeline???  "), "ci-cd-pipeline");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(slugify("Café Résumé"), "caf-r-sum");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }
}
