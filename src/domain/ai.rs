// src/domain/ai.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of text operations the backend offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiTool {
    #[default]
    Summarize,
    Ideas,
    Improve,
    Answer,
}

impl AiTool {
    /// Tab order of the AI panel.
    pub const ALL: [AiTool; 4] = [
        AiTool::Summarize,
        AiTool::Ideas,
        AiTool::Improve,
        AiTool::Answer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AiTool::Summarize => "summarize",
            AiTool::Ideas => "ideas",
            AiTool::Improve => "improve",
            AiTool::Answer => "answer",
        }
    }

    /// Path segment below the AI base path.
    pub fn endpoint(self) -> &'static str {
        self.name()
    }

    pub fn tab_title(self) -> &'static str {
        match self {
            AiTool::Summarize => "Summarize Text",
            AiTool::Ideas => "Generate Ideas",
            AiTool::Improve => "Improve Text",
            AiTool::Answer => "Answer Questions",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AiTool::Summarize => "Text Summarization",
            AiTool::Ideas => "Idea Generation",
            AiTool::Improve => "Text Improvement",
            AiTool::Answer => "Question Answering",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AiTool::Summarize => "Enter a long text and get a concise summary.",
            AiTool::Ideas => "Enter a topic and get creative ideas related to it.",
            AiTool::Improve => "Enter text and get an improved, more engaging version.",
            AiTool::Answer => "Ask a question and get a helpful answer.",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AiTool::Summarize => "Enter the text you want to summarize...",
            AiTool::Ideas => "Enter a topic to generate ideas about...",
            AiTool::Improve => "Enter the text you want to improve...",
            AiTool::Answer => "Enter your question...",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AiTool::Summarize => "Summarize",
            AiTool::Ideas => "Generate Ideas",
            AiTool::Improve => "Improve Text",
            AiTool::Answer => "Get Answer",
        }
    }
}

impl fmt::Display for AiTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AiTool {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiTool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownTool(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResponse {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("summarize", AiTool::Summarize)]
    #[case("ideas", AiTool::Ideas)]
    #[case("IMPROVE", AiTool::Improve)]
    #[case(" answer ", AiTool::Answer)]
    fn given_tool_name_when_parsing_then_returns_tool(#[case] input: &str, #[case] expected: AiTool) {
        assert_eq!(input.parse::<AiTool>().unwrap(), expected);
    }

    #[test]
    fn given_unknown_name_when_parsing_then_returns_unknown_tool_error() {
        let result = "translate".parse::<AiTool>();

        assert!(matches!(result, Err(DomainError::UnknownTool(name)) if name == "translate"));
    }

    #[test]
    fn given_all_tools_when_listing_endpoints_then_each_is_distinct() {
        let mut endpoints: Vec<_> = AiTool::ALL.iter().map(|t| t.endpoint()).collect();
        endpoints.sort_unstable();
        endpoints.dedup();

        assert_eq!(endpoints, vec!["answer", "ideas", "improve", "summarize"]);
    }

    #[test]
    fn given_tool_when_serializing_then_uses_lowercase_name() {
        assert_eq!(serde_json::to_string(&AiTool::Ideas).unwrap(), r#""ideas""#);
    }
}
