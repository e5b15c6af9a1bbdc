//! Deterministic placeholder when no candidate validates.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::entities::CharacterRef;

/// Avatar generation endpoint.
pub const AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

/// Edge length of the generated placeholder.
pub const FALLBACK_SIZE: u32 = 600;

/// Description characters kept in the caption.
pub const CAPTION_MAX_CHARS: usize = 100;

/// Caption used when the character has no description.
pub const GENERIC_CAPTION: &str = "Marvel Character";

/// Characters left unescaped, as in a URI component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Synthesized placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    /// Placeholder URL on the avatar service.
    pub url: String,
    /// Escaped description prefix, for alt text and diagnostics.
    pub caption: String,
}

/// Escapes a string for use as a URL query value.
#[must_use]
pub fn escape_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Builds the placeholder for a character.
#[must_use]
pub fn synthesize(character: &CharacterRef) -> FallbackImage {
    let name = escape_component(&character.name);

    let caption = if character.description.is_empty() {
        GENERIC_CAPTION.to_string()
    } else {
        let prefix: String = character.description.chars().take(CAPTION_MAX_CHARS).collect();
        escape_component(&prefix)
    };

    let url = format!(
        "{AVATAR_SERVICE_URL}?name={name}&size={FALLBACK_SIZE}&background=dc2626&color=ffffff&bold=true&format=png&rounded=false&font-size=0.4"
    );

    FallbackImage { url, caption }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Thumbnail;

    fn character(name: &str, description: &str) -> CharacterRef {
        CharacterRef::new(1, name, description, Thumbnail::default())
    }

    #[test]
    fn test_fallback_url() {
        let fallback = synthesize(&character("Test Character 1", ""));

        assert_eq!(
            fallback.url,
            "https://ui-avatars.com/api/?name=Test%20Character%201&size=600&background=dc2626&color=ffffff&bold=true&format=png&rounded=false&font-size=0.4"
        );
        assert_eq!(fallback.caption, GENERIC_CAPTION);
    }

    #[test]
    fn test_escape_matches_uri_component_rules() {
        assert_eq!(escape_component("Spider-Man"), "Spider-Man");
        assert_eq!(escape_component("Mr. & Mrs. X"), "Mr.%20%26%20Mrs.%20X");
        assert_eq!(escape_component("A-Bomb (HAS)"), "A-Bomb%20(HAS)");
        assert_eq!(escape_component("Zoë"), "Zo%C3%AB");
    }

    #[test]
    fn test_caption_truncated() {
        let long = "x".repeat(250);
        let fallback = synthesize(&character("Hulk", &long));

        assert_eq!(fallback.caption.len(), CAPTION_MAX_CHARS);
        assert!(!fallback.url.contains("xxx"));
    }

    #[test]
    fn test_deterministic() {
        let c = character("Black Widow", "Spy");

        assert_eq!(synthesize(&c), synthesize(&c));
    }
}
