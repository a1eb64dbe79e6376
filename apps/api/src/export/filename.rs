/// Name used when the profile name yields nothing usable.
pub const FALLBACK_FILENAME: &str = "resume.pdf";

/// Download filename from the profile name: lowercase, every run of characters
/// outside `[a-z0-9]` becomes one hyphen, no hyphen at either end, `.pdf` appended.
pub fn derive_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        format!("{slug}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        assert_eq!(derive_filename("Jane Doe"), "jane-doe.pdf");
    }

    #[test]
    fn test_blank_name_falls_back() {
        assert_eq!(derive_filename(""), FALLBACK_FILENAME);
        assert_eq!(derive_filename("   \t"), FALLBACK_FILENAME);
        assert_eq!(derive_filename("!!!"), FALLBACK_FILENAME);
    }

    #[test]
    fn test_punctuation_and_accents_collapse() {
        let name = derive_filename("Renée O'Brien!!");
        assert_eq!(name, "ren-e-o-brien.pdf");
        let stem = name.strip_suffix(".pdf").unwrap();
        assert!(stem
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!stem.starts_with('-') && !stem.ends_with('-'));
    }

    #[test]
    fn test_turkish_letters_are_separators() {
        assert_eq!(derive_filename("Ayşe Yılmaz"), "ay-e-y-lmaz.pdf");
    }

    #[test]
    fn test_digits_survive() {
        assert_eq!(derive_filename("  Agent 007 "), "agent-007.pdf");
    }
}
