use std::collections::HashMap;

use markup5ever_rcdom::Handle;

use super::dom::{attr, child_elements, children, is_blank_text, is_element, tag_name, text_content};
use super::{Renderer, TagHandler};
use crate::helpers::{compact_whitespace, normalize_blank_lines};
use crate::lipi::Scheme;

pub type CustomHandler = fn(&Handle, &mut Renderer<'_>);

const PASS: TagHandler = TagHandler::Wrap { open: "", close: "" };

pub(crate) fn default_handlers() -> HashMap<&'static str, TagHandler> {
    let mut h: HashMap<&'static str, TagHandler> = HashMap::new();

    for tag in [
        "html", "body", "span", "thead", "tbody", "tfoot", "section", "article", "main",
        "font", "small", "big", "ins", "abbr", "center", "nav", "header", "footer",
    ] {
        h.insert(tag, PASS);
    }
    for tag in ["head", "script", "style", "title", "th", "td"] {
        // Cells are written by their row.
        h.insert(tag, TagHandler::Custom(skip));
    }

    h.insert("p", TagHandler::Wrap { open: "\n\n", close: "\n\n" });
    h.insert("div", TagHandler::Wrap { open: "\n", close: "\n" });
    h.insert("br", TagHandler::Wrap { open: "\n", close: "" });
    h.insert("hr", TagHandler::Wrap { open: "\n\n---\n\n", close: "" });

    h.insert("b", TagHandler::Literal("**"));
    h.insert("strong", TagHandler::Literal("**"));
    h.insert("i", TagHandler::Literal("*"));
    h.insert("em", TagHandler::Literal("*"));
    h.insert("cite", TagHandler::Literal("*"));

    h.insert("h1", TagHandler::Wrap { open: "\n\n# ", close: "\n\n" });
    h.insert("h2", TagHandler::Wrap { open: "\n\n## ", close: "\n\n" });
    h.insert("h3", TagHandler::Wrap { open: "\n\n### ", close: "\n\n" });
    h.insert("h4", TagHandler::Wrap { open: "\n\n#### ", close: "\n\n" });
    h.insert("h5", TagHandler::Wrap { open: "\n\n##### ", close: "\n\n" });
    h.insert("h6", TagHandler::Wrap { open: "\n\n###### ", close: "\n\n" });

    h.insert("ul", TagHandler::Custom(list));
    h.insert("ol", TagHandler::Custom(list));
    h.insert("li", TagHandler::Wrap { open: "- ", close: "\n" });

    h.insert("a", TagHandler::Custom(link));
    h.insert("img", TagHandler::Custom(image));
    h.insert("blockquote", TagHandler::Custom(blockquote));
    h.insert("q", TagHandler::Custom(inline_quote));

    h.insert("code", TagHandler::Literal("`"));
    h.insert("kbd", TagHandler::Literal("`"));
    h.insert("samp", TagHandler::Literal("`"));
    h.insert("pre", TagHandler::Custom(code_block));

    h.insert("dl", TagHandler::Wrap { open: "\n\n", close: "\n\n" });
    h.insert("dt", TagHandler::Wrap { open: "\n**", close: "**\n" });
    h.insert("dd", TagHandler::Wrap { open: ": ", close: "\n" });

    h.insert("table", TagHandler::Wrap { open: "\n\n", close: "\n\n" });
    h.insert("caption", TagHandler::Wrap { open: "\n*", close: "*\n\n" });
    h.insert("tr", TagHandler::Custom(table_row));

    h.insert("sup", TagHandler::Literal("^"));
    h.insert("sub", TagHandler::Literal("~"));
    h.insert("s", TagHandler::Literal("~~"));
    h.insert("strike", TagHandler::Literal("~~"));
    h.insert("del", TagHandler::Literal("~~"));

    h
}

/// Tags of the Cologne digitizations (`<s>` Sanskrit text, `<ls>` literary
/// sources, `<lb/>` line breaks, `<div n="..">` sense divisions).
pub(crate) fn cologne_handlers() -> Vec<(&'static str, TagHandler)> {
    vec![
        ("s", TagHandler::Custom(script_text)),
        ("div", TagHandler::Custom(cologne_div)),
        ("lb", TagHandler::Wrap { open: "\n", close: "" }),
        ("ls", TagHandler::Literal("*")),
        ("lex", TagHandler::Literal("*")),
        ("etym", TagHandler::Literal("*")),
        ("bot", TagHandler::Literal("*")),
        ("bio", TagHandler::Literal("*")),
        ("hom", TagHandler::Wrap { open: "**", close: "** " }),
        ("ab", PASS),
        ("lang", PASS),
        ("gk", PASS),
        ("srs", PASS),
        ("f", TagHandler::Wrap { open: " [", close: "]" }),
        ("pc", TagHandler::Custom(skip)),
        ("info", TagHandler::Custom(skip)),
    ]
}

pub(crate) fn telugu_handlers() -> Vec<(&'static str, TagHandler)> {
    vec![
        ("pos", TagHandler::Wrap { open: "*", close: "* " }),
        ("gram", TagHandler::Literal("*")),
        ("ex", TagHandler::Literal("*")),
        ("sn", TagHandler::Wrap { open: "\n\n**", close: "** " }),
    ]
}

fn skip(_node: &Handle, _r: &mut Renderer<'_>) {}

/// Emphasis used when a tag doubles as the headword tag.
fn emphasis_marker(tag: &str) -> &'static str {
    match tag {
        "b" | "strong" => "**",
        "i" | "em" => "*",
        _ => "",
    }
}

/// Writes converted text, keeping surrounding whitespace outside the markers.
fn push_converted(r: &mut Renderer<'_>, raw: &str, converted: &str, marker: &str) {
    if raw.starts_with(char::is_whitespace) {
        r.push_str(" ");
    }
    r.push_str(marker);
    r.push_str(converted);
    r.push_str(marker);
    if raw.ends_with(char::is_whitespace) {
        r.push_str(" ");
    }
}

pub(crate) fn headword(node: &Handle, r: &mut Renderer<'_>) {
    let raw = text_content(node);
    let core = raw.trim();
    if core.is_empty() {
        return;
    }
    if r.is_headword_repeat(core) {
        return;
    }

    let converted = r.convert_headword(core);
    let tag = tag_name(node).unwrap_or_default();
    push_converted(r, &raw, &converted, emphasis_marker(&tag));
}

/// Sanskrit text in the body of a Cologne entry. The digitizations write it
/// in SLP1 even where headwords use another scheme.
fn script_text(node: &Handle, r: &mut Renderer<'_>) {
    let raw = text_content(node);
    let core = raw.trim();
    if core.is_empty() {
        r.push_str(&raw);
        return;
    }
    let converted = r.convert_from(core, Scheme::Slp1);
    push_converted(r, &raw, &converted, "");
}

/// `<div n="lb">` is a line break, any other `n` starts a new paragraph.
fn cologne_div(node: &Handle, r: &mut Renderer<'_>) {
    match attr(node, "n").as_deref() {
        Some("lb") => r.push_str("\n"),
        Some(_) => r.push_str("\n\n"),
        None => {}
    }
    r.render_children(node);
}

fn list(node: &Handle, r: &mut Renderer<'_>) {
    let ordered = is_element(node, "ol");
    r.list_depth += 1;
    let indent = "  ".repeat(r.list_depth - 1);

    r.push_str("\n");
    let mut n = 1;
    for child in children(node) {
        if is_element(&child, "li") {
            let text = r.render_children_to_string(&child);
            let marker = if ordered { format!("{}.", n) } else { "-".to_string() };
            r.push_str(&format!("{}{} {}\n", indent, marker, text.trim()));
            n += 1;
        } else if !is_blank_text(&child) {
            r.render_node(&child);
        }
    }
    r.push_str("\n");

    r.list_depth -= 1;
}

fn link(node: &Handle, r: &mut Renderer<'_>) {
    let text = r.render_children_to_string(node);
    let text = text.trim();
    match attr(node, "href").filter(|h| !h.trim().is_empty()) {
        Some(href) if text.is_empty() => r.push_str(&format!("<{}>", href)),
        Some(href) => r.push_str(&format!("[{}]({})", text, href)),
        None => r.push_str(text),
    }
}

fn image(node: &Handle, r: &mut Renderer<'_>) {
    if let Some(src) = attr(node, "src") {
        let alt = attr(node, "alt").unwrap_or_default();
        r.push_str(&format!("![{}]({})", alt, src));
    }
}

fn blockquote(node: &Handle, r: &mut Renderer<'_>) {
    r.quote_depth += 1;
    let inner = r.render_children_to_string(node);
    r.quote_depth -= 1;

    let inner = normalize_blank_lines(inner.trim_end());
    if inner.is_empty() {
        return;
    }

    r.push_str("\n\n");
    for line in inner.lines() {
        if line.trim().is_empty() {
            r.push_str(">\n");
        } else {
            r.push_str("> ");
            r.push_str(line.trim());
            r.push_str("\n");
        }
    }
    r.push_str("\n");
}

fn inline_quote(node: &Handle, r: &mut Renderer<'_>) {
    r.quote_depth += 1;
    let inner = r.render_children_to_string(node);
    r.quote_depth -= 1;
    r.push_str(&format!("\"{}\"", inner.trim()));
}

fn code_block(node: &Handle, r: &mut Renderer<'_>) {
    let text = text_content(node);
    let text = text.trim_matches('\n');
    r.push_str("\n\n```\n");
    r.push_str(text);
    r.push_str("\n```\n\n");
}

/// Writes one pipe-delimited line per row, header cells included.
fn table_row(node: &Handle, r: &mut Renderer<'_>) {
    let cells: Vec<Handle> = child_elements(node)
        .into_iter()
        .filter(|c| is_element(c, "th") || is_element(c, "td"))
        .collect();
    if cells.is_empty() {
        r.render_children(node);
        return;
    }

    let texts: Vec<String> = cells
        .iter()
        .map(|c| {
            let t = r.render_children_to_string(c);
            compact_whitespace(&t).replace('|', "\\|")
        })
        .collect();

    r.push_str(&format!("| {} |\n", texts.join(" | ")));
}

#[cfg(test)]
mod tests {
    use crate::dictionaries::DictionaryId;
    use crate::lipi::Scheme;
    use crate::markup::MarkupParser;

    fn md(id: DictionaryId, markup: &str) -> String {
        MarkupParser::for_dictionary(id).parse(markup, Scheme::Iast, None).markdown
    }

    #[test]
    fn test_ordered_and_nested_lists() {
        let out = md(DictionaryId::Dcs, "<ol><li>one<ul><li>inner</li></ul></li><li>two</li></ol>");
        assert_eq!(out, "1. one\n  - inner\n2. two");
    }

    #[test]
    fn test_links() {
        assert_eq!(md(DictionaryId::Dcs, r#"<a href="https://x.org">site</a>"#), "[site](https://x.org)");
        assert_eq!(md(DictionaryId::Dcs, "<a>plain</a>"), "plain");
        assert_eq!(md(DictionaryId::Dcs, r#"<a href="https://x.org"></a>"#), "<https://x.org>");
    }

    #[test]
    fn test_blockquote_and_inline_quote() {
        assert_eq!(md(DictionaryId::Dcs, "<blockquote>  quoted text  </blockquote>"), "> quoted text");
        assert_eq!(md(DictionaryId::Dcs, "he said <q> yes </q>"), "he said \"yes\"");
    }

    #[test]
    fn test_quotes_keep_spacing_around_inline_markup() {
        assert_eq!(
            md(DictionaryId::Dcs, "<blockquote>the <i>yoga</i> sutra\n  of patanjali</blockquote>"),
            "> the *yoga* sutra of patanjali"
        );
        assert_eq!(
            md(DictionaryId::Dcs, "he said <q>the <b>big</b> dog</q>"),
            "he said \"the **big** dog\""
        );
        assert_eq!(md(DictionaryId::Dcs, "<blockquote>one<br> two</blockquote>"), "> one\n> two");
    }

    #[test]
    fn test_table() {
        let out = md(
            DictionaryId::Dcs,
            "<table><tr><th>Case</th><th>Form</th></tr><tr><td>nom.</td><td>devaḥ</td></tr></table>",
        );
        assert_eq!(out, "| Case | Form |\n| nom. | devaḥ |");
    }

    #[test]
    fn test_definition_list_and_code() {
        let out = md(DictionaryId::Dcs, "<dl><dt>term</dt><dd>meaning</dd></dl>");
        assert_eq!(out, "**term**\n: meaning");
        assert_eq!(md(DictionaryId::Dcs, "use <code>x</code>"), "use `x`");
        assert_eq!(md(DictionaryId::Dcs, "<pre>a\n b</pre>"), "```\na\n b\n```");
    }

    #[test]
    fn test_inline_formats() {
        assert_eq!(md(DictionaryId::Dcs, "x<sup>2</sup> H<sub>2</sub> <del>no</del>"), "x^2^ H~2~ ~~no~~");
        assert_eq!(md(DictionaryId::Dcs, "a<hr>b"), "a\n\n---\n\nb");
        assert_eq!(md(DictionaryId::Dcs, "a<br>b"), "a\nb");
    }

    #[test]
    fn test_cologne_div_sentinels() {
        assert_eq!(md(DictionaryId::Mw, r#"a<div n="lb"/>b"#), "a\nb");
        assert_eq!(md(DictionaryId::Mw, r#"a<div n="1"/>b"#), "a\n\nb");
        assert_eq!(md(DictionaryId::Mw, "a<div>b</div>c"), "abc");
    }

    #[test]
    fn test_cologne_skips_page_refs() {
        assert_eq!(md(DictionaryId::Mw, "word <pc>1,2</pc>meaning"), "word meaning");
    }
}
