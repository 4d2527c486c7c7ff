//! Clean-up applied to verse text as it is read from a translation database.
//! MyBible-style databases embed formatting tags (`<pb/>`, `<i>…</i>`) and
//! bracketed footnote markers that must never reach the projector.

use std::sync::LazyLock;

use regex::Regex;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>|\[[^\]]*\]").expect("markup pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Strip markup tags and bracketed annotations, collapse runs of whitespace to
/// a single space and trim the ends. Applying it twice yields the same string.
pub fn sanitize_verse_text(raw: &str) -> String {
    let stripped = MARKUP.replace_all(raw, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn removes_tags_and_collapses_spaces() {
        assert_eq!(
            sanitize_verse_text("In the<pb/> beginning  God created"),
            "In the beginning God created"
        );
    }

    #[test]
    fn removes_bracketed_annotations() {
        assert_eq!(
            sanitize_verse_text("And God said[1], Let there be <i>light</i>:  and there was light."),
            "And God said, Let there be light: and there was light."
        );
    }

    #[test]
    fn strips_nested_looking_markup_without_leaving_tags() {
        assert_eq!(sanitize_verse_text("<<a>b> [[x]] end"), "b> ] end");
    }

    #[test]
    fn trims_and_collapses_mixed_whitespace() {
        assert_eq!(sanitize_verse_text("  \tword\n\n other  "), "word other");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "In the<pb/> beginning  God created",
            "<f>[note]</f>  Jesus wept.  ",
            "<<a>b> [[x]] end",
            "plain",
            "",
            "   ",
        ];
        for raw in samples {
            let once = sanitize_verse_text(raw);
            assert_eq!(sanitize_verse_text(&once), once, "input: {raw:?}");
        }
    }
}
