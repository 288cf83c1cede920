// Shared-chat markdown -> result document
//
// Input is the markdown export of an IDE chat session: `#### _User_` and
// `#### _Assistant_` headers, optionally quoted with `>`.

use crate::domain::{ModelRun, PromptExchange, ResultDocument, ResultFileName, RunTimestamp};
use once_cell::sync::Lazy;
use regex::Regex;

static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>+\s*").expect("quote pattern is valid"));
static USER_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#### _User_\s*$").expect("user header pattern is valid"));
static ASSISTANT_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#### _Assistant_\s*$").expect("assistant header pattern is valid"));

const SHARE_COMMAND: &str = "/share";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    User,
    Assistant,
}

struct Collector<'t> {
    timings: &'t [f64],
    next_timing: usize,
    preamble_skipped: bool,
    pending_user: Option<String>,
    exchanges: Vec<PromptExchange>,
}

impl<'t> Collector<'t> {
    fn new(timings: &'t [f64]) -> Self {
        Self {
            timings,
            next_timing: 0,
            preamble_skipped: false,
            pending_user: None,
            exchanges: Vec::new(),
        }
    }

    fn emit(&mut self, user: String, assistant: String) {
        let time = self.timings.get(self.next_timing).copied();
        self.next_timing += 1;
        self.exchanges.push(PromptExchange::new(user, assistant, time));
    }

    fn finish_block(&mut self, role: Role, lines: &[String]) {
        let content = block_content(lines);
        if content.is_empty() || content.trim().eq_ignore_ascii_case(SHARE_COMMAND) {
            return;
        }

        match role {
            Role::User => {
                self.pending_user = Some(content);
            }
            // The first assistant block is the session greeting
            Role::Assistant if !self.preamble_skipped => {
                self.preamble_skipped = true;
            }
            Role::Assistant => {
                if let Some(user) = self.pending_user.take() {
                    self.emit(user, content);
                }
            }
        }
    }

    /// Closing assistant block: answers any pending question, greeting or not
    fn finish_trailing(&mut self, lines: &[String]) {
        let content = block_content(lines);
        if content.is_empty() || content.trim().eq_ignore_ascii_case(SHARE_COMMAND) {
            return;
        }
        if let Some(user) = self.pending_user.take() {
            self.emit(user, content);
        }
    }
}

/// Convert a shared chat export into a single-run result document
///
/// # Arguments
/// * `markdown` - exported chat
/// * `model` - model name recorded in the run
/// * `timestamp` - run time, also used in the file name
/// * `timings` - response times (ms), consumed one per exchange in order
pub fn convert_shared_chat(
    markdown: &str,
    model: &str,
    timestamp: RunTimestamp,
    timings: &[f64],
) -> ResultDocument {
    let mut collector = Collector::new(timings);
    let mut role: Option<Role> = None;
    let mut lines: Vec<String> = Vec::new();

    for raw in markdown.lines() {
        let line = QUOTE_RE.replace(raw, "");
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let header = if USER_HEADER_RE.is_match(line) {
            Some(Role::User)
        } else if ASSISTANT_HEADER_RE.is_match(line) {
            Some(Role::Assistant)
        } else {
            None
        };

        match header {
            Some(next) => {
                if let Some(current) = role {
                    collector.finish_block(current, &lines);
                }
                role = Some(next);
                lines.clear();
            }
            None if line.trim().eq_ignore_ascii_case(SHARE_COMMAND) => {}
            None => lines.push(line.to_string()),
        }
    }

    // Trailing block: only a closing assistant answer is kept
    if role == Some(Role::Assistant) {
        collector.finish_trailing(&lines);
    }

    let run = ModelRun {
        name: model.to_string(),
        date: timestamp.to_string(),
        file_name: ResultFileName::compose(model, timestamp),
        total_time: Some(timings.iter().sum()),
        prompt: collector.exchanges,
    };

    ResultDocument::single(run)
}

fn block_content(lines: &[String]) -> String {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| QUOTE_RE.replace(l, "").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
