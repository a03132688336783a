use crate::platform::Platform;

/// Build the destination URL for a platform from free-text input.
///
/// An empty or whitespace-only query maps to the platform's home page;
/// anything else becomes a search URL (or a profile URL for Instagram).
/// Pure function: no I/O, no state, same input always gives the same URL.
pub fn build_url(platform: Platform, query: &str) -> String {
    let q = query.trim();
    if q.is_empty() {
        return platform.home_url().to_string();
    }

    match platform {
        Platform::YouTube => format!(
            "https://www.youtube.com/results?search_query={}",
            encode_query(q)
        ),
        Platform::Google => format!("https://www.google.com/search?q={}", encode_query(q)),
        // Wikipedia article titles use underscores instead of spaces and
        // are not percent-encoded
        Platform::Wikipedia => format!("https://en.wikipedia.org/wiki/{}", q.replace(' ', "_")),
        Platform::WhatsApp => format!("https://web.whatsapp.com/search?q={}", encode_query(q)),
        Platform::GitHub => format!("https://github.com/search?q={}", encode_query(q)),
        Platform::Instagram => format!(
            "https://www.instagram.com/{}",
            encode_query(instagram_handle(q))
        ),
    }
}

/// Percent-encode with spaces as `+`, the form-style convention the search
/// endpoints above expect in their query strings.
fn encode_query(q: &str) -> String {
    // urlencoding emits %20 for a space and %25 for a literal '%', so any
    // "%20" in its output can only have come from a space byte.
    urlencoding::encode(q).replace("%20", "+")
}

/// Instagram takes a profile handle: drop at most one leading `@`, then
/// keep only the first whitespace-delimited token.
fn instagram_handle(q: &str) -> &str {
    let q = q.strip_prefix('@').unwrap_or(q);
    q.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_opens_home_page() {
        for platform in Platform::ALL {
            assert_eq!(build_url(platform, ""), platform.home_url());
            assert_eq!(build_url(platform, "   \t "), platform.home_url());
        }
    }

    #[test]
    fn test_search_templates() {
        assert_eq!(
            build_url(Platform::Google, "cats"),
            "https://www.google.com/search?q=cats"
        );
        assert_eq!(
            build_url(Platform::YouTube, "lo-fi beats"),
            "https://www.youtube.com/results?search_query=lo-fi+beats"
        );
        assert_eq!(
            build_url(Platform::WhatsApp, "team chat"),
            "https://web.whatsapp.com/search?q=team+chat"
        );
        assert_eq!(
            build_url(Platform::GitHub, "gtk4 launcher"),
            "https://github.com/search?q=gtk4+launcher"
        );
    }

    #[test]
    fn test_query_is_trimmed_before_building() {
        assert_eq!(
            build_url(Platform::Google, "  cats  "),
            "https://www.google.com/search?q=cats"
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert_eq!(
            build_url(Platform::Google, "a&b=c"),
            "https://www.google.com/search?q=a%26b%3Dc"
        );
        assert_eq!(
            build_url(Platform::GitHub, "c++ http/2"),
            "https://github.com/search?q=c%2B%2B+http%2F2"
        );
    }

    #[test]
    fn test_wikipedia_uses_underscores() {
        assert_eq!(
            build_url(Platform::Wikipedia, "Alan Turing"),
            "https://en.wikipedia.org/wiki/Alan_Turing"
        );
        assert_eq!(
            build_url(Platform::Wikipedia, "Rust"),
            "https://en.wikipedia.org/wiki/Rust"
        );
    }

    #[test]
    fn test_instagram_strips_at_and_truncates_to_first_token() {
        assert_eq!(
            build_url(Platform::Instagram, "@jane_doe extra words"),
            "https://www.instagram.com/jane_doe"
        );
        assert_eq!(
            build_url(Platform::Instagram, "jane doe"),
            "https://www.instagram.com/jane"
        );
    }

    #[test]
    fn test_instagram_strips_only_one_at() {
        assert_eq!(
            build_url(Platform::Instagram, "@@jane"),
            "https://www.instagram.com/%40jane"
        );
    }

    #[test]
    fn test_instagram_bare_at_falls_back_to_home_page() {
        assert_eq!(build_url(Platform::Instagram, "@"), "https://www.instagram.com/");
        assert_eq!(build_url(Platform::Instagram, "@ "), "https://www.instagram.com/");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        for platform in Platform::ALL {
            assert_eq!(
                build_url(platform, "repeat me"),
                build_url(platform, "repeat me")
            );
        }
    }
}
