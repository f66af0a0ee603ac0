//! Read-only queries over the parsed markup tree.

use markup5ever_rcdom::{Handle, NodeData};

/// Local tag name of an element node.
pub fn tag_name(handle: &Handle) -> Option<String> {
    match handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

pub fn is_element(handle: &Handle, tag: &str) -> bool {
    match handle.data {
        NodeData::Element { ref name, .. } => name.local.as_ref() == tag,
        _ => false,
    }
}

/// Value of the named attribute, if present.
pub fn attr(handle: &Handle, attr_name: &str) -> Option<String> {
    match handle.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == attr_name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

pub fn children(handle: &Handle) -> Vec<Handle> {
    handle.children.borrow().iter().cloned().collect()
}

pub fn child_elements(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|c| matches!(c.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Concatenated text of all descendant text nodes.
pub fn text_content(handle: &Handle) -> String {
    fn collect_text(handle: &Handle, text: &mut String) {
        if let NodeData::Text { ref contents } = handle.data {
            text.push_str(&contents.borrow());
        }
        for child in handle.children.borrow().iter() {
            collect_text(child, text);
        }
    }

    let mut text = String::new();
    collect_text(handle, &mut text);
    text
}

/// True for text nodes holding only whitespace.
pub fn is_blank_text(handle: &Handle) -> bool {
    match handle.data {
        NodeData::Text { ref contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}
