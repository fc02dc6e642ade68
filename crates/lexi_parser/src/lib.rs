//! lexi-parser — split raw tutor replies into prose and an interactive payload.
//!
//! The upstream generator is asked to answer either in plain markdown or
//! with one JSON object from a fixed widget vocabulary, usually inside a
//! ```json fence. It does not always honor that contract, so extraction is
//! best-effort: five strategies run in priority order and the first one that
//! isolates an object carrying a recognized key wins.
//!
//! ```text
//!  raw reply ──▶ fenced block ──▶ whole string ──▶ leading object
//!                    │                 │                │
//!                    └────────── trailing object ── first balanced
//!                                      │
//!                        { textContent, interactiveElement }
//! ```
//!
//! `parse_reply` is total and pure: malformed JSON is never an error, only a
//! reason to fall through, and input that yields no payload comes back
//! unchanged as `text_content`.

mod element;
mod scanner;
mod strategy;

pub use element::{ElementKind, InteractiveElement, ParsedReply};

/// Split one raw generator reply into prose and at most one interactive
/// element.
///
/// Deterministic, side-effect-free, and never fails; see the crate docs for
/// the strategy order. Empty input yields an empty reply.
pub fn parse_reply(raw: &str) -> ParsedReply {
    let raw = raw.trim();
    if raw.is_empty() {
        return ParsedReply::empty();
    }

    for (name, extract) in strategy::STRATEGIES {
        if let Some(extraction) = extract(raw) {
            tracing::debug!(
                target: "lexi.parser",
                strategy = name,
                kind = extraction.element.kind.as_str(),
                "extracted interactive element"
            );
            return ParsedReply {
                text_content: normalize_text(&extraction.remainder),
                interactive_element: Some(extraction.element),
            };
        }
        tracing::trace!(target: "lexi.parser", strategy = name, "strategy did not match");
    }

    ParsedReply::text(raw)
}

/// Collapse runs of blank (or whitespace-only) lines into exactly one blank
/// line and trim the ends. Applied only after a successful extraction.
fn normalize_text(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut pending_blank = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            pending_blank = true;
        } else {
            if pending_blank && !lines.is_empty() {
                lines.push("");
            }
            lines.push(line);
            pending_blank = false;
        }
    }
    lines.join("\n").trim().to_string()
}
