//! Clean-up applied to a confirmation fragment supplied by the browser
//! before it is placed inside the email shell, whose header already shows
//! the subject.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

static HEADING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"</?h[1-6]\b[^>]*>")
        .case_insensitive(true)
        .build()
        .expect("heading tag pattern should compile")
});

/// Removes opening and closing `<h1>`..`<h6>` tags. Their text stays.
pub fn strip_headings(fragment: &str) -> String {
    HEADING_TAG.replace_all(fragment, "").into_owned()
}

/// Removes every literal occurrence of `text`.
pub fn strip_literal(fragment: &str, text: &str) -> String {
    if text.trim().is_empty() {
        return fragment.to_string();
    }
    match Regex::new(&regex::escape(text)) {
        Ok(re) => re.replace_all(fragment, "").into_owned(),
        Err(_) => fragment.replace(text, ""),
    }
}

pub fn sanitize_fragment(fragment: &str, subject: &str) -> String {
    let fragment = strip_headings(fragment);
    strip_literal(&fragment, subject).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_heading_tags_keeps_text() {
        assert_eq!(strip_headings("<h2>Title</h2><p>Body</p>"), "Title<p>Body</p>");
        assert_eq!(
            strip_headings("<H1 class=\"big\">\nTitle\n</H1 ><p>a</p><h6>x</h6>"),
            "\nTitle\n<p>a</p>x"
        );
        assert_eq!(strip_headings("<h3>open<p>b</p>"), "open<p>b</p>");
        assert_eq!(strip_headings("a</h4>b"), "ab");
        // not headings
        assert_eq!(
            strip_headings("<hr><header>x</header><p>h1</p>"),
            "<hr><header>x</header><p>h1</p>"
        );
    }

    #[test]
    fn test_strip_literal_escapes_metacharacters() {
        assert_eq!(
            strip_literal("<p>Thanks (really)? Thanks (really)?</p>", "Thanks (really)?"),
            "<p> </p>"
        );
        assert_eq!(strip_literal("a.b axb", "a.b"), " axb");
        assert_eq!(strip_literal("keep", "  "), "keep");
    }

    #[test]
    fn test_sanitize_fragment() {
        let subject = "Thank you, Alice!";
        let html = "<h2>Thank you, Alice!</h2>\n<p>Thank you, Alice! Hi.</p>";
        let clean = sanitize_fragment(html, subject);
        assert_eq!(clean, "<p> Hi.</p>");

        assert_eq!(
            sanitize_fragment("<h3>Extra</h3><p>Hi</p>", "Thanks"),
            "Extra<p>Hi</p>"
        );
    }
}
