use url::{ParseError, Url};

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
// Schemeless input is read as a path, so only its query can still match.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Converts a YouTube link into its embeddable form.
///
/// Recognised shapes, in order: `youtu.be/<id>`, `/shorts/<id>`, and the
/// `v` query parameter of a watch URL. A link without a scheme is treated as
/// a bare path, so `www.youtube.com/watch?v=<id>` still resolves through its
/// query. Anything else yields an empty string.
pub fn yt_embed_url(raw_url: &str) -> String {
    if raw_url.is_empty() {
        return String::new();
    }
    let parsed = match Url::parse(raw_url) {
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE).and_then(|base| base.join(raw_url))
        }
        other => other,
    };
    let Ok(url) = parsed else {
        return String::new();
    };

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let path = url.path();

    let video_id = if host.contains("youtu.be") {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string()
    } else if let Some((_, rest)) = path.split_once("/shorts/") {
        rest.split('?').next().unwrap_or_default().to_string()
    } else {
        url.query_pairs()
            .find(|(key, value)| key == "v" && !value.is_empty())
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()
    };

    if video_id.is_empty() {
        String::new()
    } else {
        format!("{EMBED_BASE}{video_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_link() {
        assert_eq!(
            yt_embed_url("https://youtu.be/abc123"),
            "https://www.youtube.com/embed/abc123"
        );
        assert_eq!(
            yt_embed_url("https://youtu.be/abc123/extra?t=10"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn watch_link_ignores_other_params() {
        assert_eq!(
            yt_embed_url("https://www.youtube.com/watch?v=abc123&t=5"),
            "https://www.youtube.com/embed/abc123"
        );
        assert_eq!(
            yt_embed_url("https://m.youtube.com/watch?feature=share&v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn shorts_link_strips_query() {
        assert_eq!(
            yt_embed_url("https://www.youtube.com/shorts/abc123?feature=share"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn unusable_input_is_empty() {
        assert_eq!(yt_embed_url(""), "");
        assert_eq!(yt_embed_url("https://example.com"), "");
        assert_eq!(yt_embed_url("not a url"), "");
        assert_eq!(yt_embed_url("youtu.be/abc123"), "");
        assert_eq!(yt_embed_url("https://www.youtube.com/watch?v="), "");
        assert_eq!(yt_embed_url("https://youtu.be/"), "");
    }

    #[test]
    fn schemeless_watch_link_resolves_through_its_query() {
        assert_eq!(
            yt_embed_url("www.youtube.com/watch?v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
        assert_eq!(
            yt_embed_url("youtube.com/shorts/abc123?feature=share"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn host_match_is_case_insensitive() {
        assert_eq!(
            yt_embed_url("https://YOUTU.BE/abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }
}
