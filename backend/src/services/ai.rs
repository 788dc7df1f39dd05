//! Hosted-model coach client
//!
//! Talks to any OpenAI-compatible chat completions endpoint. The whole
//! feature is optional: it is disabled by default and the rule-based coach
//! keeps working without it. Upstream failures never surface as errors to
//! the caller; they degrade to a fixed apology line.

use crate::config::AiConfig;
use optitrain_shared::models::{ChatMessage, MessageRole, ProfileSnapshot};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Messages older than this are dropped from the prompt
const CONVERSATION_WINDOW: usize = 12;

const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Render the profile block with "Unknown" placeholders, so the model is
/// told which fields are absent instead of guessing
fn profile_block(profile: &ProfileSnapshot) -> String {
    fn or_unknown(value: Option<&str>) -> &str {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => "Unknown",
        }
    }

    let goal = profile.goal.map(|g| g.as_str());
    let experience = profile.experience_level.map(|e| e.as_str());

    format!(
        "User profile:\n\
         - Name: {}\n\
         - Goal: {}\n\
         - Experience: {}\n\
         - Workouts per week: {}\n\
         - Weight: {}\n\
         - Target weight: {}\n\
         - Height: {}\n\
         - Location: {}",
        or_unknown(Some(profile.name.as_str())),
        or_unknown(goal),
        or_unknown(experience),
        or_unknown(profile.workouts_per_week.as_deref()),
        or_unknown(profile.weight.as_deref()),
        or_unknown(profile.target_weight.as_deref()),
        or_unknown(profile.height.as_deref()),
        or_unknown(profile.location.as_deref()),
    )
}

/// Flatten the windowed conversation and profile into a single prompt
fn build_prompt(messages: &[ChatMessage], profile: &ProfileSnapshot) -> String {
    let start = messages.len().saturating_sub(CONVERSATION_WINDOW);
    let conversation = messages[start..]
        .iter()
        .map(|msg| {
            let speaker = match msg.role {
                MessageRole::User => "User",
                MessageRole::Assistant => "Assistant",
            };
            format!("{}: {}", speaker, msg.content)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an AI fitness coach. Be concise, helpful, and safe.\n\
         Never invent user data. If the user asks for metrics or plans that require missing info, ask a clarifying question first.\n\
         Avoid medical advice; suggest seeing a professional for injuries or conditions.\n\n\
         {}\n\n\
         Conversation:\n\
         {}\n\n\
         Assistant:",
        profile_block(profile),
        conversation
    )
}

#[derive(Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AiClient {
    pub fn new(config: &AiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Ask the hosted model for a reply. Infallible from the caller's view:
    /// any transport or parse failure is logged and replaced with a fixed
    /// apology
    pub async fn generate(&self, messages: &[ChatMessage], profile: &ProfileSnapshot) -> String {
        let prompt = build_prompt(messages, profile);

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![CompletionMessage {
                role: "user",
                content: &prompt,
            }],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(err) => {
                warn!(error = %err, "ai request failed");
                return FALLBACK_REPLY.to_string();
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "ai request returned error status");
            return FALLBACK_REPLY.to_string();
        }

        match response.json::<CompletionResponse>().await {
            Ok(body) => body
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .filter(|content| !content.is_empty())
                .unwrap_or_else(|| FALLBACK_REPLY.to_string()),
            Err(err) => {
                warn!(error = %err, "ai response body did not parse");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
