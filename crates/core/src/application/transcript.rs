// Transcript formatting: role tags removed, fenced code split out

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static ROLE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(user|assistant)>").expect("role tag pattern is valid"));
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("fence pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    Text(String),
    Code {
        language: Option<String>,
        body: String,
    },
}

/// Split a user or assistant message into text and code segments
pub fn format_transcript(text: &str) -> Vec<Segment> {
    let cleaned = ROLE_TAG_RE.replace_all(text, "");
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in FENCE_RE.captures_iter(&cleaned) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(&mut segments, &cleaned[last..whole.start()]);
        segments.push(code_segment(inner.as_str()));
        last = whole.end();
    }
    push_text(&mut segments, &cleaned[last..]);

    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    let text = text.trim_matches('\n');
    if !text.trim().is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
}

fn code_segment(inner: &str) -> Segment {
    // ```rust\n...``` carries the language on the opening line
    if let Some((first, rest)) = inner.split_once('\n') {
        let first = first.trim();
        if !first.is_empty() && !first.contains(char::is_whitespace) {
            return Segment::Code {
                language: Some(first.to_string()),
                body: rest.trim_end_matches('\n').to_string(),
            };
        }
        if first.is_empty() {
            return Segment::Code {
                language: None,
                body: rest.trim_end_matches('\n').to_string(),
            };
        }
    }
    Segment::Code {
        language: None,
        body: inner.trim_matches('\n').to_string(),
    }
}
