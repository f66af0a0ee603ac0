mod helpers;
use helpers as h;

use kosha_backend::dictionaries::DictionaryId;
use kosha_backend::lipi::Scheme;
use kosha_backend::markup::{MarkupParser, TagHandler};
use kosha_backend::types::ScriptCode;

#[test]
fn test_heading() {
    h::test_setup();
    assert_eq!(h::render(DictionaryId::Dcs, "<h1>Main Title</h1>", Scheme::Iast, None), "# Main Title");
}

#[test]
fn test_unordered_list() {
    h::test_setup();
    let md = h::render(DictionaryId::Dcs, "<ul><li>Item 1</li><li>Item 2</li></ul>", Scheme::Iast, None);
    assert!(md.contains("- Item 1"));
    assert!(md.contains("- Item 2"));
}

#[test]
fn test_cologne_entry() {
    h::test_setup();
    let markup = "<s>agni</s> m. fire<lb/>{%cf.%} <s>agnI</s> <ls>RV. i, 1</ls>";
    let md = h::render(DictionaryId::Mw, markup, Scheme::Devanagari, Some("agni"));
    assert_eq!(md, "m. fire\n*cf.* अग्नी *RV. i, 1*");
}

#[test]
fn test_cologne_brace_script_text() {
    h::test_setup();
    let md = h::render(DictionaryId::Mw, "see {#agni#} and {@deva@}", Scheme::Iast, None);
    assert_eq!(md, "see agni and **deva**");
}

#[test]
fn test_headword_tag_is_converted_other_bold_is_not() {
    h::test_setup();
    // AP90 marks headwords with <b> in SLP1.
    let md = h::render(DictionaryId::Ap90, "<b>agniH</b> fire", Scheme::Iast, None);
    assert_eq!(md, "**agniḥ** fire");

    // DCS marks headwords with <em>, so <b> is plain emphasis.
    let md = h::render(DictionaryId::Dcs, "<b>agniH</b> <em>agni</em>", Scheme::Devanagari, None);
    assert_eq!(md, "**agniH** *अग्नि*");
}

#[test]
fn test_headword_repetition_suppressed_only_at_start() {
    h::test_setup();
    let md = h::render(DictionaryId::Ap90, "<b>agni,</b> fire", Scheme::Iast, Some("agni"));
    assert_eq!(md, "fire");

    let md = h::render(DictionaryId::Ap90, "fire <b>agni</b>", Scheme::Iast, Some("agni"));
    assert_eq!(md, "fire **agni**");

    let md = h::render(DictionaryId::Ap90, "<b>deva</b> god", Scheme::Iast, Some("agni"));
    assert_eq!(md, "**deva** god");
}

#[test]
fn test_headword_in_later_list_item_is_kept() {
    h::test_setup();
    let markup = "<ul><li>x</li><li><b>agni</b> fire</li></ul>";
    let md = h::render(DictionaryId::Ap90, markup, Scheme::Iast, Some("agni"));
    assert_eq!(md, "- x\n- **agni** fire");

    let md = h::render(DictionaryId::Ap90, "<ul><li><b>agni</b> fire</li></ul>", Scheme::Iast, Some("agni"));
    assert_eq!(md, "- fire");
}

#[test]
fn test_cologne_script_text_is_slp1_whatever_the_headword_scheme() {
    h::test_setup();
    // BHS headwords are IAST, body Sanskrit is still SLP1.
    let md = h::render(DictionaryId::Bhs, "<b>dharma</b> see {#Darma#}", Scheme::Devanagari, None);
    assert_eq!(md, "**धर्म** see धर्म");

    let md = h::render(DictionaryId::Ieg, "cf. <s>kzetra</s>", Scheme::Iast, None);
    assert_eq!(md, "cf. kṣetra");
}

#[test]
fn test_telugu_dictionary() {
    h::test_setup();
    let md = h::render(DictionaryId::Brown, "<b>అగ్ని</b> <pos>n.</pos>fire", Scheme::Iast, None);
    assert_eq!(md, "**agni** *n.* fire");
}

#[test]
fn test_render_languages() {
    h::test_setup();
    let parser = MarkupParser::for_dictionary(DictionaryId::Brown);
    let out = parser.render_languages("<b>అగ్ని</b> fire", &[ScriptCode::Eng, ScriptCode::Tel, ScriptCode::San], None);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].value, "**agni** fire");
    assert_eq!(out[1].value, "**అగ్ని** fire");
    assert_eq!(out[2].value, "**अग्नि** fire");
}

#[test]
fn test_table_rows() {
    h::test_setup();
    let markup = "<table><tr><th>sg.</th><th>pl.</th></tr><tr><td>devaḥ</td><td>devāḥ</td></tr></table>";
    let md = h::render(DictionaryId::Dcs, markup, Scheme::Iast, None);
    assert_eq!(md, "| sg. | pl. |\n| devaḥ | devāḥ |");
}

#[test]
fn test_blockquote_trailing_whitespace() {
    h::test_setup();
    let md = h::render(DictionaryId::Dcs, "<p>intro</p><blockquote><p>line one</p>\n  </blockquote>", Scheme::Iast, None);
    assert_eq!(md, "intro\n\n> line one");
}

#[test]
fn test_unknown_tags_recorded() {
    h::test_setup();
    let parser = MarkupParser::for_dictionary(DictionaryId::Dcs);
    let parsed = parser.parse("<gloss>fire <xx>god</xx></gloss>", Scheme::Iast, None);
    assert_eq!(parsed.markdown, "fire god");
    assert_eq!(parsed.unknown_tags.into_iter().collect::<Vec<_>>(), vec!["gloss", "xx"]);
}

#[test]
fn test_custom_handler_takes_precedence() {
    h::test_setup();
    let parser = MarkupParser::for_dictionary(DictionaryId::Dcs)
        .with_handler("h1", TagHandler::Wrap { open: "== ", close: " ==" });
    assert_eq!(parser.parse("<h1>Title</h1>", Scheme::Iast, None).markdown, "== Title ==");
    assert!(parser.handler("h1").is_some());
}

#[test]
fn test_malformed_markup_never_fails() {
    h::test_setup();
    let inputs = [
        "",
        "   ",
        "<b>unclosed",
        "</p></div>stray closers",
        "<<>>",
        "<div><span><i>deep",
        "<table><td>cell",
        "a &amp b &unknown; c",
        "{#open brace",
        "<lb/><lb/><lb/>",
        "<ul><li>one<li>two",
        "<!-- comment only -->",
    ];
    for id in [DictionaryId::Mw, DictionaryId::Brown, DictionaryId::Dcs] {
        let parser = MarkupParser::for_dictionary(id);
        for input in inputs {
            let parsed = parser.parse(input, Scheme::Devanagari, Some("agni"));
            assert!(!parsed.markdown.contains("\n\n\n"), "{}: {:?}", id, input);
            assert_eq!(parsed.markdown, parsed.markdown.trim());
        }
    }
    assert_eq!(h::render(DictionaryId::Dcs, "<b>unclosed", Scheme::Iast, None), "**unclosed**");
}

#[test]
fn test_parser_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MarkupParser>();
}
