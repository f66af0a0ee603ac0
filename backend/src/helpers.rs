use regex::Regex;
use lazy_static::lazy_static;
use html_escape::decode_html_entities;

lazy_static! {
    static ref RE_COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref RE_TAG: Regex = Regex::new(r"</?[A-Za-z][^<>]*>").unwrap();
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref RE_MANY_NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref RE_SELF_CLOSING: Regex = Regex::new(r"<([A-Za-z][\w:-]*)((?:\s[^<>]*?)?)\s*/>").unwrap();
}

/// Tags that html5ever already treats as void elements.
const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "meta", "link"];

/// Remove markup tags and comments, leaving a space where a tag stood so
/// that words on either side stay apart.
pub fn strip_tags(text: &str) -> String {
    let s = RE_COMMENT.replace_all(text, " ");
    RE_TAG.replace_all(&s, " ").to_string()
}

/// Strip tags, then decode entities such as `&amp;` and `&nbsp;`.
pub fn strip_html(text: &str) -> String {
    let s = strip_tags(text);
    decode_html_entities(&s).to_string()
}

/// Collapse every whitespace run (including newlines) to a single space.
pub fn compact_whitespace(text: &str) -> String {
    collapse_whitespace(text).trim().to_string()
}

/// Like `compact_whitespace`, but keeps a single space at either end.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").to_string()
}

/// Collapse three or more consecutive newlines to a blank line and trim.
pub fn normalize_blank_lines(text: &str) -> String {
    RE_MANY_NEWLINES.replace_all(text, "\n\n").trim().to_string()
}

/// Truncate to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Expand XML-style `<tag/>` into `<tag></tag>`.
///
/// An HTML parser ignores the slash on non-void elements, which would make
/// `<lb/>` swallow the rest of the entry as its children.
pub fn expand_self_closing_tags(markup: &str) -> String {
    RE_SELF_CLOSING
        .replace_all(markup, |caps: &regex::Captures| {
            let name = &caps[1];
            let attrs = &caps[2];
            if VOID_TAGS.contains(&name.to_lowercase().as_str()) {
                format!("<{}{}>", name, attrs)
            } else {
                format!("<{}{}></{}>", name, attrs, name)
            }
        })
        .to_string()
}

/// Split a comma-joined field list, e.g. `"meaning, notes"`.
pub fn split_field_list(fields: &str) -> Vec<&str> {
    fields
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
