//! Ordered extraction strategies.
//!
//! Each strategy inspects the raw reply independently and either yields the
//! interactive payload plus the leftover prose, or fails so the next one can
//! try. Decode failures and unrecognized keys are both plain failures; no
//! strategy ever raises.

use serde_json::Value;

use crate::element::InteractiveElement;
use crate::scanner;

/// One successful extraction: the payload and the surrounding prose with the
/// matched span removed (not yet whitespace-normalized).
pub(crate) struct Extraction {
    pub element: InteractiveElement,
    pub remainder: String,
}

pub(crate) type Strategy = fn(&str) -> Option<Extraction>;

/// Priority order. The first strategy that yields a recognized payload wins.
pub(crate) const STRATEGIES: [(&str, Strategy); 5] = [
    ("fenced_block", fenced_block),
    ("whole_string", whole_string),
    ("leading_object", leading_object),
    ("trailing_object", trailing_object),
    ("first_balanced", first_balanced),
];

/// Parse a candidate span and accept it only as a recognized element.
fn decode_candidate(candidate: &str) -> Option<InteractiveElement> {
    let value: Value = serde_json::from_str(candidate).ok()?;
    InteractiveElement::from_value(value)
}

/// Join the prose before and after an extracted span with one blank line.
fn join_fragments(pre: &str, post: &str) -> String {
    match (pre.is_empty(), post.is_empty()) {
        (false, false) => format!("{pre}\n\n{post}"),
        (false, true) => pre.to_string(),
        (true, false) => post.to_string(),
        (true, true) => String::new(),
    }
}

/// Strategy 1: a ```json fenced block containing one object.
///
/// Only the first json-tagged fence is considered; the fence markers are
/// removed along with the payload.
fn fenced_block(raw: &str) -> Option<Extraction> {
    let (open, content_start) = find_json_fence(raw)?;
    let close = content_start + raw[content_start..].find("```")?;
    let inner = raw[content_start..close].trim();
    let element = decode_candidate(inner)?;
    let pre = raw[..open].trim();
    let post = raw[close + 3..].trim();
    Some(Extraction {
        element,
        remainder: join_fragments(pre, post),
    })
}

/// Locate the first ``` fence carrying a case-insensitive `json` tag.
/// Returns (fence start, content start).
fn find_json_fence(raw: &str) -> Option<(usize, usize)> {
    let mut search = 0;
    while let Some(rel) = raw[search..].find("```") {
        let open = search + rel;
        let tag_end = open + 3 + "json".len();
        if let Some(tag) = raw.get(open + 3..tag_end) {
            if tag.eq_ignore_ascii_case("json") {
                return Some((open, tag_end));
            }
        }
        search = open + 3;
    }
    None
}

/// Strategy 2: the entire (trimmed) input is one object.
fn whole_string(raw: &str) -> Option<Extraction> {
    if !(raw.starts_with('{') && raw.ends_with('}')) {
        return None;
    }
    let element = decode_candidate(raw)?;
    Some(Extraction {
        element,
        remainder: String::new(),
    })
}

/// Strategy 3: an object at position 0 with trailing prose.
fn leading_object(raw: &str) -> Option<Extraction> {
    if !raw.starts_with('{') {
        return None;
    }
    let end = scanner::balanced_object_end(raw, 0)?;
    let element = decode_candidate(&raw[..end])?;
    Some(Extraction {
        element,
        remainder: raw[end..].trim().to_string(),
    })
}

/// Strategy 4: an object ending the input, with leading prose.
///
/// Candidate opening braces are tried rightmost-first. Each candidate runs to
/// end-of-input; `serde_json` rejects trailing non-whitespace, which is the
/// exact-tail guard: a parse that still has prose after it cannot succeed.
fn trailing_object(raw: &str) -> Option<Extraction> {
    if !raw.ends_with('}') {
        return None;
    }
    let mut upper = raw.len();
    while let Some(start) = raw[..upper].rfind('{') {
        if let Some(element) = decode_candidate(&raw[start..]) {
            return Some(Extraction {
                element,
                remainder: raw[..start].trim().to_string(),
            });
        }
        upper = start;
    }
    None
}

/// Strategy 5: the first balanced object anywhere in the string.
///
/// Lowest confidence. If the first balanced span fails to decode or lacks a
/// recognized key, the search stops; a valid block further in is missed on
/// purpose rather than backtracking through every brace pair.
fn first_balanced(raw: &str) -> Option<Extraction> {
    let start = raw.find('{')?;
    let end = scanner::balanced_object_end(raw, start)?;
    let element = decode_candidate(&raw[start..end])?;
    let pre = raw[..start].trim();
    let post = raw[end..].trim();
    Some(Extraction {
        element,
        remainder: join_fragments(pre, post),
    })
}
