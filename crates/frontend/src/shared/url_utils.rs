/// Utilities for reading deep-link state out of the URL fragment.

/// Extracts the page id from a raw `location.hash` value.
///
/// Strips the leading `#` and percent-decodes the rest; a fragment that does
/// not decode cleanly is used as-is rather than treated as an error.
pub fn fragment_from_hash(hash: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Current URL fragment of the document, empty when there is none.
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| fragment_from_hash(&hash))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_hash() {
        assert_eq!(fragment_from_hash("#settings"), "settings");
        assert_eq!(fragment_from_hash("settings"), "settings");
    }

    #[test]
    fn empty_and_bare_hash_give_no_fragment() {
        assert_eq!(fragment_from_hash(""), "");
        assert_eq!(fragment_from_hash("#"), "");
    }

    #[test]
    fn percent_encoded_fragments_are_decoded() {
        assert_eq!(fragment_from_hash("#release%20notes"), "release notes");
    }

    #[test]
    fn undecodable_fragment_is_kept_verbatim() {
        assert_eq!(fragment_from_hash("#%FF"), "%FF");
    }
}
