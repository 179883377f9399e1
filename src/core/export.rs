//! Standalone HTML export for generated articles
//!
//! Turns an article's Markdown body into a self-contained document with
//! Open Graph, Twitter Card and schema.org `BlogPosting` metadata and an
//! inline stylesheet, ready to be published as-is.

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use pulldown_cmark::{Options, Parser, html};
use regex::Regex;
use serde_json::json;

use crate::core::format::{format_naive_date, parse_date, read_time};

/// Maximum characters kept in the meta description before the ellipsis
pub const SUMMARY_MAX_CHARS: usize = 160;

/// Filename stem used when the title has no usable characters
pub const DEFAULT_FILE_STEM: &str = "article";

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(```|~~~).*?(```|~~~|\z)").expect("valid regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]*`").expect("valid regex"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("valid regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}#{1,6}[ \t]*").expect("valid regex"));
static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}>[ \t]?").expect("valid regex"));
static UNDERSCORE_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[\s(])_{1,3}([^_\n]+?)_{1,3}([\s).,!?:;]|$)").expect("valid regex")
});
static WATCH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([A-Za-z0-9_-]+)").expect("valid regex"));
static PATH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/shorts/|/embed/)([A-Za-z0-9_-]+)").expect("valid regex")
});

/// Everything the exporter needs to know about one article
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportInput<'a> {
    /// Markdown body
    pub content: &'a str,
    pub title: &'a str,
    /// Source video URL
    pub video_url: Option<&'a str>,
    /// ISO-8601 creation timestamp
    pub created_at: Option<&'a str>,
}

/// Render Markdown to an HTML fragment
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Plain-text summary for the meta description.
///
/// Best-effort: strips headings, emphasis, link syntax (keeping the link
/// text), images and code, collapses whitespace and truncates to
/// [`SUMMARY_MAX_CHARS`] characters followed by `...`.
pub fn seo_summary(content: &str) -> String {
    let text = CODE_FENCE.replace_all(content, " ");
    let text = INLINE_CODE.replace_all(&text, "");
    let text = IMAGE.replace_all(&text, "");

    // Nested brackets can leave a fresh link behind after one pass
    let mut text = text.into_owned();
    loop {
        let next = LINK.replace_all(&text, "$1").into_owned();
        if next == text {
            break;
        }
        text = next;
    }

    let text = HEADING.replace_all(&text, "");
    let text = BLOCKQUOTE.replace_all(&text, "");
    let text = UNDERSCORE_EMPHASIS.replace_all(&text, "$1$2$3");
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`'))
        .collect();

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_with_ellipsis(&collapsed, SUMMARY_MAX_CHARS)
}

fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Extract the video id from a YouTube watch, short, shorts or embed URL
pub fn video_id(url: &str) -> Option<String> {
    if !url.contains("youtube.com") && !url.contains("youtu.be") {
        return None;
    }
    WATCH_ID
        .captures(url)
        .or_else(|| PATH_ID.captures(url))
        .map(|caps| caps[1].to_string())
}

/// Thumbnail image for a recognized video URL
pub fn thumbnail_url(video_url: &str) -> Option<String> {
    video_id(video_url).map(|id| format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id))
}

/// Download filename stem: lowercased title, non-alphanumeric runs become `_`
pub fn file_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut pending_separator = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !stem.is_empty() {
                stem.push('_');
            }
            pending_separator = false;
            stem.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    if stem.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        stem
    }
}

pub fn html_filename(title: &str) -> String {
    format!("{}.html", file_stem(title))
}

pub fn markdown_filename(title: &str) -> String {
    format!("{}.md", file_stem(title))
}

/// Escape HTML special characters for text and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Build the export document using the current time as the publish fallback
pub fn export_html(input: &ExportInput<'_>) -> String {
    export_html_at(input, Utc::now())
}

/// Build the export document. `now` is only used when `created_at` is
/// missing or unparsable.
pub fn export_html_at(input: &ExportInput<'_>, now: DateTime<Utc>) -> String {
    let title = if input.title.trim().is_empty() {
        "Untitled article"
    } else {
        input.title.trim()
    };
    let body_html = render_markdown(input.content);
    let summary = seo_summary(input.content);
    let description = if summary.is_empty() {
        title.to_string()
    } else {
        summary
    };
    let video_url = input.video_url.filter(|u| !u.trim().is_empty());
    let thumbnail = video_url.and_then(thumbnail_url);
    let read_time = read_time(input.content);

    let parsed = input
        .created_at
        .and_then(|raw| parse_date(raw).map(|date| (raw.trim().to_string(), date)));
    let (published_iso, published_date) = match parsed {
        Some(found) => found,
        None => (
            now.to_rfc3339_opts(SecondsFormat::Secs, true),
            now.date_naive(),
        ),
    };
    let published_display = format_naive_date(published_date);

    let json_ld = blog_posting_json_ld(
        title,
        &description,
        &published_iso,
        thumbnail.as_deref(),
        video_url,
    );

    let title_html = escape_html(title);
    let description_attr = escape_html(&description);

    let mut meta = String::new();
    meta.push_str(&format!(
        "    <meta name=\"description\" content=\"{}\">\n",
        description_attr
    ));
    meta.push_str("    <meta property=\"og:type\" content=\"article\">\n");
    meta.push_str(&format!(
        "    <meta property=\"og:title\" content=\"{}\">\n",
        title_html
    ));
    meta.push_str(&format!(
        "    <meta property=\"og:description\" content=\"{}\">\n",
        description_attr
    ));
    meta.push_str(&format!(
        "    <meta property=\"article:published_time\" content=\"{}\">\n",
        escape_html(&published_iso)
    ));
    if let Some(url) = video_url {
        meta.push_str(&format!(
            "    <meta property=\"og:video\" content=\"{}\">\n",
            escape_html(url)
        ));
    }
    let card = if thumbnail.is_some() {
        "summary_large_image"
    } else {
        "summary"
    };
    meta.push_str(&format!(
        "    <meta name=\"twitter:card\" content=\"{}\">\n",
        card
    ));
    meta.push_str(&format!(
        "    <meta name=\"twitter:title\" content=\"{}\">\n",
        title_html
    ));
    meta.push_str(&format!(
        "    <meta name=\"twitter:description\" content=\"{}\">\n",
        description_attr
    ));
    if let Some(image) = &thumbnail {
        let image = escape_html(image);
        meta.push_str(&format!(
            "    <meta property=\"og:image\" content=\"{}\">\n",
            image
        ));
        meta.push_str(&format!(
            "    <meta name=\"twitter:image\" content=\"{}\">\n",
            image
        ));
    }

    let mut header = String::new();
    header.push_str(&format!("      <h1 class=\"post-title\">{}</h1>\n", title_html));
    header.push_str("      <div class=\"post-meta\">\n");
    header.push_str(&format!(
        "        <time datetime=\"{}\">{}</time>\n",
        escape_html(&published_iso),
        published_display
    ));
    header.push_str(&format!(
        "        <span class=\"read-time\">{}</span>\n",
        read_time
    ));
    if let Some(url) = video_url {
        header.push_str(&format!(
            "        <a class=\"video-badge\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Watch the video</a>\n",
            escape_html(url)
        ));
    }
    header.push_str("      </div>\n");
    if let Some(image) = &thumbnail {
        header.push_str(&format!(
            "      <img class=\"post-thumbnail\" src=\"{}\" alt=\"{}\">\n",
            escape_html(image),
            title_html
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
  <head>\n\
    <meta charset=\"utf-8\">\n\
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
    <title>{title_html}</title>\n\
{meta}\
    <script type=\"application/ld+json\">{json_ld}</script>\n\
    <style>{STYLESHEET}</style>\n\
  </head>\n\
  <body>\n\
    <article>\n\
    <header class=\"post-header\">\n\
{header}\
    </header>\n\
    <div class=\"post-body\">\n\
{body_html}\
    </div>\n\
    </article>\n\
    <footer class=\"post-footer\">Generated with BlogGen.ai from a YouTube video.</footer>\n\
  </body>\n\
</html>\n"
    )
}

fn blog_posting_json_ld(
    title: &str,
    description: &str,
    published: &str,
    image: Option<&str>,
    video_url: Option<&str>,
) -> String {
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": title,
        "description": description,
        "datePublished": published,
    });
    if let Some(image) = image {
        value["image"] = json!(image);
    }
    if let Some(url) = video_url {
        value["video"] = json!({
            "@type": "VideoObject",
            "name": title,
            "url": url,
            "thumbnailUrl": image,
            "uploadDate": published,
        });
    }
    // Keep "</script>" inside string values from closing the element
    value.to_string().replace('<', "\\u003c")
}

const STYLESHEET: &str = r#"
      :root { color-scheme: light dark; --bg: #ffffff; --fg: #1e293b; --muted: #64748b; --accent: #4f46e5; --code-bg: #f1f5f9; --border: #e2e8f0; }
      @media (prefers-color-scheme: dark) {
        :root { --bg: #020617; --fg: #e2e8f0; --muted: #94a3b8; --accent: #818cf8; --code-bg: #0f172a; --border: #1e293b; }
      }
      * { box-sizing: border-box; }
      body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; line-height: 1.7; }
      article { max-width: 720px; margin: 0 auto; padding: 3rem 1.25rem; }
      .post-title { font-size: 2.25rem; line-height: 1.2; margin: 0 0 1rem; }
      .post-meta { display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: center; color: var(--muted); font-size: 0.9rem; }
      .video-badge { display: inline-block; padding: 0.2rem 0.7rem; border-radius: 999px; background: #dc2626; color: #fff; text-decoration: none; font-weight: 600; }
      .post-thumbnail { width: 100%; border-radius: 12px; margin-top: 1.5rem; }
      .post-body h1, .post-body h2, .post-body h3 { line-height: 1.3; margin-top: 2rem; }
      .post-body a { color: var(--accent); }
      .post-body img { max-width: 100%; }
      .post-body pre { background: var(--code-bg); padding: 1rem; border-radius: 8px; overflow-x: auto; }
      .post-body code { background: var(--code-bg); padding: 0.1rem 0.3rem; border-radius: 4px; font-size: 0.9em; }
      .post-body pre code { padding: 0; }
      .post-body blockquote { border-left: 4px solid var(--accent); margin: 1.5rem 0; padding-left: 1rem; color: var(--muted); }
      .post-body table { border-collapse: collapse; width: 100%; }
      .post-body th, .post-body td { border: 1px solid var(--border); padding: 0.4rem 0.6rem; }
      .post-footer { max-width: 720px; margin: 0 auto; padding: 1.5rem 1.25rem 3rem; border-top: 1px solid var(--border); color: var(--muted); font-size: 0.85rem; text-align: center; }
    "#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_render_markdown_blocks() {
        let html = render_markdown("# Title\n\nSome *text* and **bold**.\n\n- a\n- b\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>a</li>"));
    }

    #[test]
    fn test_render_markdown_code_and_images() {
        let html = render_markdown("```rust\nfn main() {}\n```\n\n![alt](https://x.test/a.png)");
        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("<img src=\"https://x.test/a.png\" alt=\"alt\""));
    }

    #[test]
    fn test_summary_strips_markdown() {
        let md = "# Heading\n\nSome *text* with **bold**, `code` and a [link](https://example.com).\n\n```\nlet x = 1;\n```\nEnd.";
        let summary = seo_summary(md);
        assert_eq!(summary, "Heading Some text with bold, and a link. End.");
    }

    #[test]
    fn test_summary_underscore_emphasis_keeps_identifiers() {
        assert_eq!(seo_summary("an _important_ snake_case word"), "an important snake_case word");
        assert_eq!(seo_summary("__strong__ start"), "strong start");
    }

    #[test]
    fn test_summary_nested_link_syntax() {
        let summary = seo_summary("See [[docs](https://a.test)](https://b.test) now");
        assert!(!summary.contains("]("));
        assert!(summary.contains("docs"));
    }

    #[test]
    fn test_summary_truncates_with_ellipsis() {
        let md = "word ".repeat(100);
        let summary = seo_summary(&md);
        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= SUMMARY_MAX_CHARS + 3);
    }

    #[test]
    fn test_summary_short_text_untouched() {
        assert_eq!(seo_summary("Short body."), "Short body.");
        assert_eq!(seo_summary(""), "");
    }

    #[test]
    fn test_summary_multibyte_truncation() {
        let md = "é".repeat(400);
        let summary = seo_summary(&md);
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + 3);
    }

    #[test]
    fn test_video_id_patterns() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            video_id("https://youtube.com/watch?feature=share&v=abc_123-X"),
            Some("abc_123-X".to_string())
        );
        assert_eq!(video_id("https://youtu.be/abc123"), Some("abc123".to_string()));
        assert_eq!(
            video_id("https://www.youtube.com/shorts/short1?si=x"),
            Some("short1".to_string())
        );
        assert_eq!(video_id("https://vimeo.com/watch?v=123"), None);
        assert_eq!(video_id("not a url"), None);
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("https://www.youtube.com/watch?v=abc"),
            Some("https://img.youtube.com/vi/abc/maxresdefault.jpg".to_string())
        );
        assert_eq!(thumbnail_url("https://example.com/video"), None);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("My Post"), "my_post");
        assert_eq!(file_stem("  React 19: Hooks!! Guide "), "react_19_hooks_guide");
        assert_eq!(file_stem("???"), "article");
        assert_eq!(file_stem(""), "article");
        assert_eq!(html_filename("A/B"), "a_b.html");
        assert_eq!(markdown_filename("A/B"), "a_b.md");
    }

    #[test]
    fn test_export_scenario() {
        let input = ExportInput {
            content: "# Title\nSome *text*.",
            title: "My Post",
            video_url: None,
            created_at: None,
        };
        let doc = export_html_at(&input, fixed_now());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>My Post</title>"));
        assert!(doc.contains("<h1>Title</h1>"));
        assert!(doc.contains("<meta name=\"description\" content=\"Title Some text.\">"));
        assert!(doc.contains("<meta name=\"twitter:card\" content=\"summary\">"));
        assert!(!doc.contains("og:image"));
    }

    #[test]
    fn test_export_with_video_and_date() {
        let input = ExportInput {
            content: "Body text",
            title: "Video Post",
            video_url: Some("https://www.youtube.com/watch?v=xyz789"),
            created_at: Some("2024-10-24T10:00:00Z"),
        };
        let doc = export_html_at(&input, fixed_now());
        assert!(doc.contains("October 24, 2024"));
        assert!(doc.contains("https://img.youtube.com/vi/xyz789/maxresdefault.jpg"));
        assert!(doc.contains("summary_large_image"));
        assert!(doc.contains("\"@type\":\"BlogPosting\""));
        assert!(doc.contains("\"datePublished\":\"2024-10-24T10:00:00Z\""));
        assert!(doc.contains("class=\"video-badge\""));
        assert!(doc.contains("<article>"));
        assert!(doc.contains("prefers-color-scheme: dark"));
    }

    #[test]
    fn test_export_falls_back_to_now() {
        let input = ExportInput {
            content: "",
            title: "",
            video_url: Some(""),
            created_at: Some("garbage"),
        };
        let doc = export_html_at(&input, fixed_now());
        assert!(doc.contains("February 14, 2025"));
        assert!(doc.contains("2025-02-14T12:00:00Z"));
        assert!(doc.contains("1 min read"));
        assert!(doc.contains("<title>Untitled article</title>"));
        assert!(!doc.contains("video-badge"));
    }

    #[test]
    fn test_export_escapes_title() {
        let input = ExportInput {
            content: "x",
            title: "<script>alert('x')</script>",
            ..Default::default()
        };
        let doc = export_html_at(&input, fixed_now());
        assert!(!doc.contains("<script>alert"));
        assert!(doc.contains("&lt;script&gt;"));
        assert!(!doc.contains("</script>alert"));
    }
}
