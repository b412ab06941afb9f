// src/application/ai_tools.rs
use crate::application::AiApi;
use crate::domain::AiTool;
use tracing::{error, info, instrument};

pub const EMPTY_INPUT: &str = "Please enter some text.";
pub const PROCESSING_FAILED: &str =
    "An error occurred while processing your request. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiPanelState {
    Idle,
    Processing,
    Done(String),
    Failed(String),
}

/// The `/ai-tools` panel: one active tool tab, one input, one result.
#[derive(Debug)]
pub struct AiToolsView {
    tool: AiTool,
    input: String,
    state: AiPanelState,
}

impl AiToolsView {
    pub fn new() -> Self {
        Self {
            tool: AiTool::default(),
            input: String::new(),
            state: AiPanelState::Idle,
        }
    }

    pub fn tool(&self) -> AiTool {
        self.tool
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &AiPanelState {
        &self.state
    }

    /// The submit control is disabled while processing or without input.
    pub fn can_submit(&self) -> bool {
        self.state != AiPanelState::Processing && !self.input.trim().is_empty()
    }

    /// Switches tab and drops any result from the previous tool.
    pub fn select_tool(&mut self, tool: AiTool) {
        self.tool = tool;
        if matches!(self.state, AiPanelState::Done(_)) {
            self.state = AiPanelState::Idle;
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    #[instrument(level = "debug", skip_all, fields(tool = %self.tool))]
    pub async fn submit<A: AiApi + ?Sized>(&mut self, api: &A) {
        if self.state == AiPanelState::Processing {
            return;
        }
        if self.input.trim().is_empty() {
            self.state = AiPanelState::Failed(EMPTY_INPUT.to_string());
            return;
        }

        self.state = AiPanelState::Processing;
        self.state = match api.process(self.tool, &self.input).await {
            Ok(result) => {
                info!(chars = result.chars().count(), "AI tool returned result");
                AiPanelState::Done(result)
            }
            Err(err) => {
                error!(error = %err, "AI service error");
                AiPanelState::Failed(PROCESSING_FAILED.to_string())
            }
        };
    }
}

impl Default for AiToolsView {
    fn default() -> Self {
        Self::new()
    }
}
