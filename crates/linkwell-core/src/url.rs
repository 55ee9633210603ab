//! URL normalization and domain extraction.

use url::Url;

/// Normalize a URL by stripping every terminating `/`.
///
/// Articles are keyed by normalized URL, so `http://a.com/x` and
/// `http://a.com/x/` refer to the same article.
pub fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// The authority (host, plus port if present) of the given URL.
///
/// Returns an empty string when the URL does not parse or has no authority,
/// so relative wiki-internal names simply have no domain.
pub fn url_domain(url: &str) -> String {
    let normalized = normalize_url(url);
    match Url::parse(&normalized) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default();
            match parsed.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            }
        }
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize_url("http://a.com/x/"), "http://a.com/x");
        assert_eq!(normalize_url("http://a.com/x///"), "http://a.com/x");
        assert_eq!(normalize_url("http://a.com/x"), "http://a.com/x");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("/"), "");
    }

    #[test]
    fn test_domain_simple() {
        assert_eq!(url_domain("http://1.com/a"), "1.com");
        assert_eq!(url_domain("https://sub.example.org/path/"), "sub.example.org");
    }

    #[test]
    fn test_domain_with_port() {
        assert_eq!(url_domain("http://localhost:8080/wiki"), "localhost:8080");
    }

    #[test]
    fn test_domain_of_bare_name_is_empty() {
        assert_eq!(url_domain("just-a-note"), "");
    }
}
