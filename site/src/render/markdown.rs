//! Markdown-subset renderer
//!
//! Release notes use a small line-oriented subset: three heading levels,
//! unordered lists and paragraphs, plus inline code, strong, emphasis and
//! http(s) links. Anything else is rendered as plain escaped text.

use std::sync::LazyLock;

use regex::Regex;

use super::i18n::Strings;

static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"));
static EM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("valid regex"));
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").expect("valid regex")
});

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Apply inline formatting to one line of text.
///
/// Escaping runs first, so markup typed into the notes can never become a live
/// tag; the patterns below only use characters that escaping leaves alone.
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let with_code = CODE.replace_all(&escaped, "<code>$1</code>");
    let with_strong = STRONG.replace_all(&with_code, "<strong>$1</strong>");
    let with_em = EM.replace_all(&with_strong, "<em>$1</em>");
    LINK.replace_all(&with_em, r#"<a href="$2" target="_blank" rel="noopener">$1</a>"#)
        .into_owned()
}

/// Render a release body to HTML
pub fn render_markdown(body: Option<&str>, strings: &Strings) -> String {
    let body = match body {
        Some(b) if !b.trim().is_empty() => b,
        _ => return format!("<p>{}</p>", escape_html(strings.no_release_notes)),
    };

    let mut buf = String::new();
    let mut in_list = false;

    for line in body.split('\n').map(str::trim) {
        if line.is_empty() {
            close_list(&mut buf, &mut in_list);
            continue;
        }

        if let Some(item) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            if !in_list {
                buf.push_str("<ul>");
                in_list = true;
            }
            buf.push_str(&format!("<li>{}</li>", render_inline(item)));
            continue;
        }

        close_list(&mut buf, &mut in_list);

        if let Some(rest) = line.strip_prefix("### ") {
            buf.push_str(&format!("<h4>{}</h4>", render_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("## ") {
            buf.push_str(&format!("<h3>{}</h3>", render_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("# ") {
            buf.push_str(&format!("<h2>{}</h2>", render_inline(rest)));
        } else {
            buf.push_str(&format!("<p>{}</p>", render_inline(line)));
        }
    }

    close_list(&mut buf, &mut in_list);
    buf
}

fn close_list(buf: &mut String, in_list: &mut bool) {
    if *in_list {
        buf.push_str("</ul>");
        *in_list = false;
    }
}
