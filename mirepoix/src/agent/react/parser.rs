//! Step parser for raw model completions.
//!
//! Extracts Thought lines, Action lines, and the final answer from one raw
//! text blob. The format is an informal line-oriented grammar, so parsing is
//! deliberately tolerant: malformed or partial lines are simply not
//! recognized, and free text around recognized lines is ignored.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Line label introducing a thought
const THOUGHT_LABEL: &str = "Thought:";

/// Marker introducing the final answer
pub const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// A parsed `Action: <name>: <input>` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Tool name (a single word token)
    pub name: String,
    /// Remainder of the line, unparsed
    pub input: String,
}

/// Everything extracted from one raw completion.
///
/// `actions` holds every Action-shaped line in encounter order; only the
/// first is ever dispatched. `final_answer` is populated exactly when no
/// Action line matched: the text after the last `Final Answer:` marker, or
/// the entire raw text when the marker is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTurn {
    /// All thought lines, in encounter order
    pub thoughts: Vec<String>,
    /// All action-shaped lines, in encounter order
    pub actions: Vec<ActionRequest>,
    /// Terminal output, present iff no action matched
    pub final_answer: Option<String>,
}

impl ParsedTurn {
    /// The action that would be dispatched, if any (first match wins)
    #[must_use]
    pub fn dispatched_action(&self) -> Option<&ActionRequest> {
        self.actions.first()
    }
}

/// Pure, idempotent parser for raw completions
#[derive(Debug)]
pub struct StepParser {
    action_regex: Regex,
}

impl StepParser {
    /// Create a new step parser
    pub fn new() -> Self {
        // Tool name is a single alphanumeric/underscore token; the input is
        // the remainder of the line, unparsed.
        let action_regex =
            Regex::new(r"^\s*Action:\s*(\w+)\s*:\s*(.*)$").expect("Invalid action regex");

        Self { action_regex }
    }

    /// Parse one raw completion into thoughts, actions, and a final answer
    #[must_use]
    pub fn parse(&self, raw: &str) -> ParsedTurn {
        let mut thoughts = Vec::new();
        let mut actions = Vec::new();

        for line in raw.lines() {
            if let Some(rest) = line.trim_start().strip_prefix(THOUGHT_LABEL) {
                thoughts.push(rest.trim().to_string());
            }

            if let Some(captures) = self.action_regex.captures(line) {
                actions.push(ActionRequest {
                    name: captures[1].to_string(),
                    input: captures[2].trim().to_string(),
                });
            }
        }

        let final_answer = if actions.is_empty() {
            Some(Self::extract_final_answer(raw))
        } else {
            None
        };

        ParsedTurn {
            thoughts,
            actions,
            final_answer,
        }
    }

    /// Extract the terminal output from a completion with no action.
    ///
    /// Everything after the last `Final Answer:` marker, trimmed; the whole
    /// raw text when the marker is absent.
    fn extract_final_answer(raw: &str) -> String {
        match raw.rfind(FINAL_ANSWER_MARKER) {
            Some(pos) => raw[pos + FINAL_ANSWER_MARKER.len()..].trim().to_string(),
            None => raw.to_string(),
        }
    }
}

impl Default for StepParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn parse(raw: &str) -> ParsedTurn {
        StepParser::new().parse(raw)
    }

    #[test]
    fn test_single_action_line() {
        let turn = parse("Thought: I should look this up\nAction: search_recipes: vegan lasagna");

        assert_eq!(turn.thoughts, vec!["I should look this up"]);
        let action = turn.dispatched_action().unwrap();
        assert_eq!(action.name, "search_recipes");
        assert_eq!(action.input, "vegan lasagna");
        assert!(turn.final_answer.is_none());
    }

    #[test]
    fn test_first_action_wins() {
        let turn = parse(
            "Action: search_recipes: pad thai\n\
             Some free text in between.\n\
             Action: search_recipes: green curry",
        );

        assert_eq!(turn.actions.len(), 2);
        assert_eq!(turn.dispatched_action().unwrap().input, "pad thai");
        assert_eq!(turn.actions[1].input, "green curry");
    }

    #[test]
    fn test_multiple_thoughts_in_order() {
        let turn = parse(
            "Thought: first I consider the cuisine\n\
             Final Answer: something\n\
             Thought: then the season",
        );

        assert_eq!(
            turn.thoughts,
            vec!["first I consider the cuisine", "then the season"]
        );
    }

    #[test]
    fn test_final_answer_after_last_marker() {
        let turn = parse(
            "Thought: done reasoning\n\
             Final Answer: draft answer\n\
             Final Answer: Use 00 flour for pizza dough.  ",
        );

        assert!(turn.actions.is_empty());
        assert_eq!(
            turn.final_answer.as_deref(),
            Some("Use 00 flour for pizza dough.")
        );
    }

    #[test]
    fn test_no_marker_returns_raw_text() {
        let raw = "I just have an answer without any structure.";
        let turn = parse(raw);

        assert!(turn.actions.is_empty());
        assert_eq!(turn.final_answer.as_deref(), Some(raw));
    }

    #[test]
    fn test_action_suppresses_final_answer() {
        let turn = parse("Action: search_recipes: ramen\nFinal Answer: not yet");
        assert!(turn.final_answer.is_none());
    }

    // Whitespace tolerance around the recognized labels.
    #[test_case("Action: search_recipes: miso soup" ; "canonical spacing")]
    #[test_case("Action:search_recipes:miso soup" ; "no spacing")]
    #[test_case("  Action:  search_recipes  :  miso soup" ; "extra spacing")]
    fn test_action_whitespace_tolerance(line: &str) {
        let turn = parse(line);
        let action = turn.dispatched_action().unwrap();
        assert_eq!(action.name, "search_recipes");
        assert_eq!(action.input, "miso soup");
    }

    #[test_case("Action: bad-name: input" ; "hyphenated name")]
    #[test_case("Action: missing_second_colon input" ; "missing colon")]
    #[test_case("an Action: search_recipes: not at line start" ; "mid-line label")]
    fn test_malformed_action_not_recognized(line: &str) {
        let turn = parse(line);
        assert!(turn.actions.is_empty());
        assert!(turn.final_answer.is_some());
    }

    #[test]
    fn test_thought_requires_line_start() {
        let turn = parse("my Thought: is not a label");
        assert!(turn.thoughts.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let turn = parse("");
        assert!(turn.thoughts.is_empty());
        assert!(turn.actions.is_empty());
        assert_eq!(turn.final_answer.as_deref(), Some(""));
    }

    #[test]
    fn test_action_with_empty_input() {
        let turn = parse("Action: search_recipes:");
        let action = turn.dispatched_action().unwrap();
        assert_eq!(action.name, "search_recipes");
        assert_eq!(action.input, "");
    }

    #[test]
    fn test_parser_idempotence() {
        let raw = "Thought: compare stocks\nAction: search_recipes: dashi vs broth\nThought: then decide";
        let parser = StepParser::new();
        assert_eq!(parser.parse(raw), parser.parse(raw));
    }

    #[test]
    fn test_surrounding_free_text_ignored() {
        let turn = parse(
            "Let me think about this.\n\
             Thought: the user wants a quick dinner\n\
             Some commentary the model added.\n\
             Action: search_recipes: 20 minute pasta\n\
             Trailing remarks.",
        );

        assert_eq!(turn.thoughts, vec!["the user wants a quick dinner"]);
        assert_eq!(turn.dispatched_action().unwrap().input, "20 minute pasta");
    }
}
