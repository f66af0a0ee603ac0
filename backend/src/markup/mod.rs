//! Converts dictionary entry markup to markdown.
//!
//! Entries are parsed with html5ever, which builds a tree from any input,
//! however malformed, and the tree is walked depth-first. Each tag name maps
//! to a `TagHandler`; the map is built once per dictionary and not mutated
//! afterwards, so one `MarkupParser` can be shared between threads.

pub mod dom;
mod handlers;

use std::collections::{BTreeSet, HashMap};

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use lazy_static::lazy_static;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::dictionaries::{DictionaryConfig, DictionaryId, MarkupDialect};
use crate::helpers::{collapse_whitespace, expand_self_closing_tags, normalize_blank_lines};
use crate::lipi::{transliterate, Scheme};
use crate::types::{LanguageValue, ScriptCode};

pub use handlers::CustomHandler;

/// How an element is rendered.
#[derive(Clone, Copy)]
pub enum TagHandler {
    /// Written before and after the rendered children.
    Literal(&'static str),
    Wrap {
        open: &'static str,
        close: &'static str,
    },
    /// Full control over the output, with access to the node and its subtree.
    Custom(CustomHandler),
}

impl std::fmt::Debug for TagHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagHandler::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            TagHandler::Wrap { open, close } => f
                .debug_struct("Wrap")
                .field("open", open)
                .field("close", close)
                .finish(),
            TagHandler::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMarkdown {
    pub markdown: String,
    /// Tags that had no handler. Their content is still rendered.
    pub unknown_tags: BTreeSet<String>,
}

lazy_static! {
    static ref RE_BRACE_SCRIPT: Regex = Regex::new(r"(?s)\{#(.*?)#\}").unwrap();
    static ref RE_BRACE_ITALIC: Regex = Regex::new(r"(?s)\{%(.*?)%\}").unwrap();
    static ref RE_BRACE_BOLD: Regex = Regex::new(r"(?s)\{@(.*?)@\}").unwrap();
}

pub struct MarkupParser {
    config: DictionaryConfig,
    handlers: HashMap<&'static str, TagHandler>,
}

impl MarkupParser {
    /// Builds the handler map: HTML defaults, then the dialect's handlers,
    /// then the headword handler. Later entries replace earlier ones.
    pub fn new(config: DictionaryConfig) -> Self {
        let mut handlers = handlers::default_handlers();
        let dialect_handlers = match config.dialect {
            MarkupDialect::Html => Vec::new(),
            MarkupDialect::Cologne => handlers::cologne_handlers(),
            MarkupDialect::Telugu => handlers::telugu_handlers(),
        };
        handlers.extend(dialect_handlers);
        handlers.insert(config.headword_tag, TagHandler::Custom(handlers::headword));

        MarkupParser { config, handlers }
    }

    pub fn for_dictionary(id: DictionaryId) -> Self {
        Self::new(id.config().clone())
    }

    /// Registers a handler before the parser is put to use.
    pub fn with_handler(mut self, tag: &'static str, handler: TagHandler) -> Self {
        self.handlers.insert(tag, handler);
        self
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    pub fn handler(&self, tag: &str) -> Option<&TagHandler> {
        self.handlers.get(tag)
    }

    /// Rewrites source conventions the HTML parser would misread.
    pub fn preprocess(&self, markup: &str) -> String {
        let mut s = expand_self_closing_tags(markup);

        if self.config.dialect == MarkupDialect::Cologne {
            s = RE_BRACE_SCRIPT.replace_all(&s, "<s>$1</s>").to_string();
            s = RE_BRACE_ITALIC.replace_all(&s, "<i>$1</i>").to_string();
            s = RE_BRACE_BOLD.replace_all(&s, "<b>$1</b>").to_string();
        }

        s
    }

    /// Renders one entry to markdown, writing headword text in `to`.
    ///
    /// `headword` enables suppressing an entry that opens by repeating its
    /// own headword.
    pub fn parse(&self, markup: &str, to: Scheme, headword: Option<&str>) -> ParsedMarkdown {
        let source = self.preprocess(markup);
        if source.trim().is_empty() {
            return ParsedMarkdown::default();
        }

        let dom = parse_document(RcDom::default(), Default::default()).one(source);

        let mut renderer = Renderer::new(self, to, headword);
        renderer.render_node(&dom.document);

        if !renderer.unknown_tags.is_empty() {
            tracing::debug!(
                "{}: unrecognized tags {:?}",
                self.config.code,
                renderer.unknown_tags
            );
        }

        ParsedMarkdown {
            markdown: normalize_blank_lines(&renderer.out),
            unknown_tags: renderer.unknown_tags,
        }
    }

    /// One markdown rendering per language. Languages without a scheme
    /// (English) get headwords in IAST.
    pub fn render_languages(
        &self,
        markup: &str,
        languages: &[ScriptCode],
        headword: Option<&str>,
    ) -> Vec<LanguageValue> {
        languages
            .iter()
            .map(|lang| {
                let to = lang.scheme().unwrap_or(Scheme::Iast);
                LanguageValue::new(*lang, self.parse(markup, to, headword).markdown)
            })
            .collect()
    }
}

/// Output sink and traversal state for one `parse` call.
pub struct Renderer<'a> {
    parser: &'a MarkupParser,
    to_scheme: Scheme,
    headword: Option<&'a str>,
    out: String,
    unknown_tags: BTreeSet<String>,
    quote_depth: usize,
    list_depth: usize,
    headword_seen: bool,
    /// Set while rendering into a nested buffer when an enclosing buffer
    /// already holds content.
    outer_written: bool,
}

impl<'a> Renderer<'a> {
    fn new(parser: &'a MarkupParser, to_scheme: Scheme, headword: Option<&'a str>) -> Self {
        Renderer {
            parser,
            to_scheme,
            headword: headword.map(str::trim).filter(|h| !h.is_empty()),
            out: String::new(),
            unknown_tags: BTreeSet::new(),
            quote_depth: 0,
            list_depth: 0,
            headword_seen: false,
            outer_written: false,
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.parser.config
    }

    pub fn in_quote(&self) -> bool {
        self.quote_depth > 0
    }

    /// Headword-scheme text converted to the output scheme.
    pub fn convert_headword(&self, text: &str) -> String {
        self.convert_from(text, self.parser.config.headword_scheme)
    }

    pub fn convert_from(&self, text: &str, from: Scheme) -> String {
        transliterate(text, from, self.to_scheme)
    }

    /// True once, for a first headword element repeating the entry's
    /// headword before any other content was written.
    pub fn is_headword_repeat(&mut self, text: &str) -> bool {
        if self.headword_seen {
            return false;
        }
        self.headword_seen = true;

        let Some(headword) = self.headword else {
            return false;
        };
        let trim = |s: &str| s.trim().trim_end_matches([',', '.', ';', ':']).trim().to_string();
        !self.outer_written && self.out.trim().is_empty() && trim(text) == trim(headword)
    }

    pub fn render_children(&mut self, node: &Handle) {
        for child in node.children.borrow().iter() {
            self.render_node(child);
        }
    }

    /// Renders the children into a separate buffer and returns it.
    pub fn render_children_to_string(&mut self, node: &Handle) -> String {
        let saved = std::mem::take(&mut self.out);
        let outer_written = self.outer_written;
        self.outer_written = outer_written || !saved.trim().is_empty();

        self.render_children(node);

        self.outer_written = outer_written;
        std::mem::replace(&mut self.out, saved)
    }

    pub fn render_node(&mut self, node: &Handle) {
        match node.data {
            NodeData::Document => self.render_children(node),
            NodeData::Text { ref contents } => {
                let text = contents.borrow();
                // Quote handlers split lines themselves, so source line
                // breaks are folded into the running text.
                if self.in_quote() {
                    self.out.push_str(&collapse_whitespace(&text));
                } else {
                    self.out.push_str(&text);
                }
            }
            NodeData::Element { ref name, .. } => {
                let tag = name.local.as_ref();
                match self.parser.handlers.get(tag).copied() {
                    Some(TagHandler::Literal(s)) => {
                        self.out.push_str(s);
                        self.render_children(node);
                        self.out.push_str(s);
                    }
                    Some(TagHandler::Wrap { open, close }) => {
                        self.out.push_str(open);
                        self.render_children(node);
                        self.out.push_str(close);
                    }
                    Some(TagHandler::Custom(handler)) => handler(node, self),
                    None => {
                        self.unknown_tags.insert(tag.to_string());
                        self.render_children(node);
                    }
                }
            }
            // Comments, doctypes and processing instructions carry no content.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html_parser() -> MarkupParser {
        MarkupParser::for_dictionary(DictionaryId::Dcs)
    }

    #[test]
    fn test_heading() {
        let p = html_parser();
        assert_eq!(p.parse("<h1>Main Title</h1>", Scheme::Iast, None).markdown, "# Main Title");
        assert_eq!(p.parse("<h3>Sub</h3>", Scheme::Iast, None).markdown, "### Sub");
    }

    #[test]
    fn test_unordered_list() {
        let p = html_parser();
        let md = p.parse("<ul><li>Item 1</li><li>Item 2</li></ul>", Scheme::Iast, None).markdown;
        assert!(md.contains("- Item 1"));
        assert!(md.contains("- Item 2"));
    }

    #[test]
    fn test_unknown_tag_keeps_content() {
        let p = html_parser();
        let parsed = p.parse("<foo>kept <bar>text</bar></foo>", Scheme::Iast, None);
        assert_eq!(parsed.markdown, "kept text");
        assert!(parsed.unknown_tags.contains("foo"));
        assert!(parsed.unknown_tags.contains("bar"));
    }

    #[test]
    fn test_empty_input() {
        let p = html_parser();
        assert_eq!(p.parse("", Scheme::Iast, None), ParsedMarkdown::default());
        assert_eq!(p.parse("   \n ", Scheme::Iast, None).markdown, "");
    }

    #[test]
    fn test_custom_handler_overrides_default() {
        fn shout(node: &Handle, r: &mut Renderer<'_>) {
            let text = dom::text_content(node).to_uppercase();
            r.push_str(&text);
        }
        let p = html_parser().with_handler("b", TagHandler::Custom(shout));
        assert_eq!(p.parse("a <b>loud</b> b", Scheme::Iast, None).markdown, "a LOUD b");
    }

    #[test]
    fn test_blank_line_runs_collapse() {
        let p = html_parser();
        let md = p.parse("<p>one</p>\n\n\n<p>two</p>", Scheme::Iast, None).markdown;
        assert_eq!(md, "one\n\ntwo");
    }
}
