//! Rule-based reply generation.
//!
//! Replies come from an ordered rule table; the first rule that matches the
//! trimmed, lower-cased input wins. Every input produces a reply.

pub const GREETING_REPLY: &str =
    "Hello! I'm Vionix, your all‑in‑one AI assistant. How can I help today?";

pub const HELP_REPLY: &str = "I can organize tasks, summarize text, draft emails, brainstorm ideas, \
     and answer quick questions. Tell me what you need.";

pub const FALLBACK_REPLY: &str = "Got it. I’m processing your request. In this demo, I’m running in local smart mode \
     without external LLMs, so responses are templated. Tell me if you want a summary, todo, or general help.";

pub const SUMMARY_PREFIX: &str = "Here’s a concise summary: ";

pub const TODO_HEADER: &str = "Added to your list:";

/// Maximum number of characters kept by the summary rule.
pub const SUMMARY_MAX_CHARS: usize = 200;

const ELLIPSIS: char = '…';

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey"];
const HELP_KEYWORDS: &[&str] = &["help", "what can you do"];
const SUMMARY_PREFIXES: &[&str] = &["summarize:", "summarise:"];
const TODO_PREFIXES: &[&str] = &["todo:", "task:"];
const TODO_STRIP: &[char] = &[' ', '-', '•'];

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Greeting,
    Help,
    Summary,
    Todo,
    Fallback,
}

/// Classify a user message by the first matching rule.
pub fn classify(message: &str) -> ReplyKind {
    let text = message.trim().to_lowercase();

    if contains_any(&text, GREETING_KEYWORDS) {
        ReplyKind::Greeting
    } else if contains_any(&text, HELP_KEYWORDS) {
        ReplyKind::Help
    } else if starts_with_any(&text, SUMMARY_PREFIXES) {
        ReplyKind::Summary
    } else if starts_with_any(&text, TODO_PREFIXES) {
        ReplyKind::Todo
    } else {
        ReplyKind::Fallback
    }
}

/// Produce the assistant reply for a user message.
pub fn reply_to(message: &str) -> String {
    reply_for(classify(message), message)
}

/// Render the reply of an already classified message.
pub fn reply_for(kind: ReplyKind, message: &str) -> String {
    match kind {
        ReplyKind::Greeting => GREETING_REPLY.to_string(),
        ReplyKind::Help => HELP_REPLY.to_string(),
        ReplyKind::Summary => summarize(message),
        ReplyKind::Todo => todo_list(message),
        ReplyKind::Fallback => FALLBACK_REPLY.to_string(),
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn starts_with_any(text: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| text.starts_with(p))
}

/// Text after the leading `keyword:`.
fn after_keyword(message: &str) -> &str {
    message.split_once(':').map_or(message, |(_, rest)| rest)
}

fn summarize(message: &str) -> String {
    let content = after_keyword(message).trim();

    let mut summary: String = content.chars().take(SUMMARY_MAX_CHARS).collect();
    if content.chars().count() > SUMMARY_MAX_CHARS {
        summary.push(ELLIPSIS);
    }

    format!("{SUMMARY_PREFIX}{summary}")
}

/// Every non-blank line of the message, keyword line included, stripped of
/// surrounding spaces, dashes and bullets.
fn todo_items(message: &str) -> Vec<&str> {
    message
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches(TODO_STRIP))
        .collect()
}

fn todo_list(message: &str) -> String {
    std::iter::once(TODO_HEADER.to_string())
        .chain(todo_items(message).into_iter().map(|item| format!("• {item}")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_keywords_match_case_insensitively() {
        for input in ["hello there", "Hi!", "HEY you", "  Oh, hello  "] {
            assert!(
                reply_to(input).starts_with(GREETING_REPLY),
                "no greeting for {input:?}"
            );
        }
    }

    #[test]
    fn greeting_matches_inside_words() {
        // Substring matching: "this" contains "hi".
        assert_eq!(classify("is this working"), ReplyKind::Greeting);
    }

    #[test]
    fn greeting_wins_over_later_rules() {
        assert_eq!(classify("hey, can you help"), ReplyKind::Greeting);
        assert_eq!(classify("todo: say hello"), ReplyKind::Greeting);
    }

    #[test]
    fn help_keywords() {
        assert_eq!(reply_to("I need HELP"), HELP_REPLY);
        assert_eq!(reply_to("what can you do?"), HELP_REPLY);
    }

    #[test]
    fn short_summary_is_kept_verbatim() {
        assert_eq!(
            reply_to("Summarize:   Rust is fast.  "),
            "Here’s a concise summary: Rust is fast."
        );
    }

    #[test]
    fn british_spelling_is_accepted() {
        assert_eq!(classify("summarise: quarterly report"), ReplyKind::Summary);
    }

    #[test]
    fn long_summary_is_truncated_with_ellipsis() {
        let text = "a".repeat(250);
        let reply = reply_to(&format!("summarize: {text}"));

        let expected = format!("{SUMMARY_PREFIX}{}…", "a".repeat(200));
        assert_eq!(reply, expected);
    }

    #[test]
    fn summary_at_limit_has_no_ellipsis() {
        let text = "b".repeat(200);
        let reply = reply_to(&format!("summarize:{text}"));
        assert_eq!(reply, format!("{SUMMARY_PREFIX}{text}"));
    }

    #[test]
    fn summary_truncates_by_character_not_byte() {
        let text = "é".repeat(201);
        let reply = reply_to(&format!("summarize: {text}"));
        let body = reply.strip_prefix(SUMMARY_PREFIX).expect("prefix");
        assert_eq!(body.chars().count(), 201);
        assert!(body.ends_with('…'));
    }

    #[test]
    fn todo_lists_items_in_order() {
        assert_eq!(
            reply_to("todo:\n- a\n- b"),
            "Added to your list:\n• todo:\n• a\n• b"
        );
    }

    #[test]
    fn todo_keeps_keyword_line_as_an_item() {
        assert_eq!(
            reply_to("Task: buy milk\n• eggs\n\n  - bread  "),
            "Added to your list:\n• Task: buy milk\n• eggs\n• bread"
        );
        assert_eq!(reply_to("todo:"), "Added to your list:\n• todo:");
    }

    #[test]
    fn todo_strips_only_spaces_dashes_and_bullets() {
        // Tabs survive; a dash-only line becomes an empty bullet.
        assert_eq!(
            reply_to("todo:\n\t- a\n-\n   \n"),
            "Added to your list:\n• todo:\n• \t- a\n• "
        );
    }

    #[test]
    fn reply_for_uses_the_given_kind() {
        let msg = "todo:\n- a";
        assert_eq!(reply_for(classify(msg), msg), reply_to(msg));
        assert_eq!(reply_for(ReplyKind::Help, msg), HELP_REPLY);
    }

    #[test]
    fn prefix_must_lead_the_message() {
        assert_eq!(classify("please summarize: this"), ReplyKind::Greeting);
        assert_eq!(classify("my todo: laundry"), ReplyKind::Fallback);
    }

    #[test]
    fn everything_else_falls_back() {
        assert_eq!(reply_to("what is the weather"), FALLBACK_REPLY);
        assert_eq!(reply_to("   "), FALLBACK_REPLY);
    }
}
