use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

/// Every line-break convention collapsed by [`normalize_newlines`]: CRLF
/// first so the pair is consumed as one break, then CR, LF, vertical tab,
/// form feed, NEL, and the Unicode line/paragraph separators.
static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\r\n\x0B\x0C\u{0085}\u{2028}\u{2029}]")
        .expect("line break pattern compiles")
});

/// Rewrite all line-ending variants to a single `\n`.
pub fn normalize_newlines(text: &str) -> String {
    LINE_BREAKS.replace_all(text, "\n").into_owned()
}

/// Extract copyright notices from normalized license text.
///
/// Paragraphs are blank-line separated. A paragraph is kept when it contains
/// the literal `Copyright` (case-sensitive); a kept paragraph spanning
/// several lines is joined with `". "` into one notice. Notices are
/// deduplicated in first-seen order and joined with newlines.
///
/// Returns `None` when no notice is found.
pub fn extract_copyright_notices(text: &str) -> Option<String> {
    let mut notices: IndexSet<String> = IndexSet::new();

    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if !paragraph.contains("Copyright") {
            continue;
        }

        let notice = paragraph.split('\n').collect::<Vec<_>>().join(". ");
        notices.insert(notice);
    }

    if notices.is_empty() {
        return None;
    }

    Some(notices.into_iter().collect::<Vec<_>>().join("\n"))
}
