//! VNode capability flags shared with the soot renderer.
//!
//! Every lowered element carries exactly one flag value, derived from its
//! tag name alone. The renderer switches on this value to pick its mount
//! path, so the numbers here must stay in sync with the runtime.

/// Plain host element with no special mount handling.
pub const HTML_ELEMENT: u32 = 1;
/// User component whose concrete kind is resolved at runtime.
pub const COMPONENT_UNKNOWN: u32 = 8;
pub const SVG_ELEMENT: u32 = 16;
pub const INPUT_ELEMENT: u32 = 32;
pub const TEXTAREA_ELEMENT: u32 = 64;
pub const SELECT_ELEMENT: u32 = 128;

/// Outcome of classifying an element's name token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// A host tag, lowered to a string-literal type with these flags.
    HostTag(u32),
    /// A user component, lowered to the original identifier expression.
    Component,
}

/// Classify a simple (non-member) tag name.
pub fn classify_tag(name: &str) -> TagKind {
    if is_component_tag(name) {
        TagKind::Component
    } else {
        TagKind::HostTag(host_element_flags(name))
    }
}

/// A tag names a component iff its first character is uppercase.
/// Member tags (`Foo.Bar`) never reach this predicate; they are always
/// components.
pub fn is_component_tag(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

fn host_element_flags(tag: &str) -> u32 {
    match tag {
        "svg" => SVG_ELEMENT,
        "input" => INPUT_ELEMENT,
        "textarea" => TEXTAREA_ELEMENT,
        "select" => SELECT_ELEMENT,
        // "media" has no flag value in the runtime's capability set yet,
        // so it mounts as a plain host element.
        _ => HTML_ELEMENT,
    }
}
