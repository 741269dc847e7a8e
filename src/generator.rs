//! Hook and guide generation against a hosted chat model.
//!
//! The model is reached through [`Completion`], a single prompt-in,
//! text-out call. [`ChatClient`] implements it for any OpenAI-compatible
//! `/chat/completions` endpoint; [`Generator`] turns the raw replies into
//! hooks and guides.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ModelConfig;
use crate::prompts;

/// Number of hooks requested for every idea
pub const HOOK_COUNT: usize = 5;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("no API key: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model reply is not a JSON array of hooks: {0}")]
    MalformedHooks(String),

    #[error("expected 5 hooks, model returned {0}")]
    HookCount(usize),
}

/// One round trip to the model.
pub trait Completion {
    fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<F> Completion for F
where
    F: Fn(&str) -> Result<String, GenerationError>,
{
    fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self(prompt)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for an OpenAI-compatible chat completions API.
pub struct ChatClient {
    base_url: String,
    model: String,
    api_key: String,
    temperature: Option<f32>,
    client: reqwest::blocking::Client,
}

impl ChatClient {
    pub fn new(config: &ModelConfig, api_key: String) -> Result<Self, GenerationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            client,
        })
    }

    /// Build a client with the key taken from the configured environment variable.
    pub fn from_config(config: &ModelConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| GenerationError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }
}

impl Completion for ChatClient {
    fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        tracing::debug!(%url, model = %self.model, prompt_len = prompt.len(), "sending completion request");

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "model API returned an error");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = res.json()?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        tracing::debug!(reply_len = text.len(), "completion received");
        Ok(text)
    }
}

/// Produces hooks and shooting guides from a [`Completion`] backend.
pub struct Generator<C> {
    completion: C,
}

impl<C: Completion> Generator<C> {
    pub fn new(completion: C) -> Self {
        Self { completion }
    }

    /// Ask the model for exactly [`HOOK_COUNT`] hooks for an idea.
    pub fn generate_hooks(&self, idea: &str) -> Result<Vec<String>, GenerationError> {
        let reply = self.completion.complete(&prompts::hooks_prompt(idea))?;
        let hooks = parse_hooks(&reply)?;
        tracing::info!(count = hooks.len(), "generated hooks");
        Ok(hooks)
    }

    /// Ask the model for a shooting and editing guide for one hook.
    pub fn generate_description(&self, hook: &str) -> Result<String, GenerationError> {
        let reply = self.completion.complete(&prompts::description_prompt(hook))?;
        let description = reply.trim();
        if description.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        tracing::info!(%hook, "generated description");
        Ok(description.to_string())
    }
}

/// Pull the hook array out of a reply.
///
/// Models often wrap JSON in a code fence or a sentence, so only the
/// outermost `[...]` is parsed. Blank entries are not hooks and are dropped
/// before counting, so `["a", "", "b", "c", "d"]` is rejected.
fn parse_hooks(reply: &str) -> Result<Vec<String>, GenerationError> {
    let start = reply.find('[');
    let end = reply.rfind(']');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => return Err(GenerationError::MalformedHooks("no JSON array found".to_string())),
    };

    let raw: Vec<String> =
        serde_json::from_str(json).map_err(|e| GenerationError::MalformedHooks(e.to_string()))?;

    let hooks: Vec<String> = raw
        .iter()
        .map(|hook| hook.trim())
        .filter(|hook| !hook.is_empty())
        .map(str::to_string)
        .collect();

    if hooks.len() != HOOK_COUNT {
        return Err(GenerationError::HookCount(hooks.len()));
    }
    Ok(hooks)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Reply = Result<String, GenerationError>;

    fn reply(text: &'static str) -> impl Fn(&str) -> Result<String, GenerationError> {
        move |_| Ok(text.to_string())
    }

    #[test]
    fn hooks_from_bare_array() {
        let generator = Generator::new(reply(r#"["One", "Two", "Three", "Four", "Five"]"#));
        assert_eq!(
            generator.generate_hooks("a reel about sourdough").unwrap(),
            vec!["One", "Two", "Three", "Four", "Five"]
        );
    }

    #[test]
    fn hooks_from_fenced_reply() {
        let generator = Generator::new(reply(
            "Here you go:\n```json\n[\" A \", \"B\", \"C\", \"D\", \"E\"]\n```",
        ));
        assert_eq!(
            generator.generate_hooks("a reel about sourdough").unwrap(),
            vec!["A", "B", "C", "D", "E"]
        );
    }

    #[test]
    fn wrong_hook_count() {
        let generator = Generator::new(reply(r#"["One", "Two", "  "]"#));
        assert!(matches!(
            generator.generate_hooks("idea"),
            Err(GenerationError::HookCount(2))
        ));
    }

    #[test]
    fn blank_entries_do_not_count() {
        let generator = Generator::new(reply(r#"["One", "", "Three", "Four", "Five"]"#));
        assert!(matches!(
            generator.generate_hooks("idea"),
            Err(GenerationError::HookCount(4))
        ));
    }

    #[test]
    fn reply_without_array() {
        let generator = Generator::new(reply("Sorry, I can't help with that."));
        assert!(matches!(
            generator.generate_hooks("idea"),
            Err(GenerationError::MalformedHooks(_))
        ));
    }

    #[test]
    fn reply_with_non_string_array() {
        let generator = Generator::new(reply("[1, 2, 3, 4, 5]"));
        assert!(matches!(
            generator.generate_hooks("idea"),
            Err(GenerationError::MalformedHooks(_))
        ));
    }

    #[test]
    fn prompt_carries_input() {
        let generator = Generator::new(|prompt: &str| -> Reply {
            assert!(prompt.contains("Reel Hook: Watch this!"));
            Ok("**Shooting Guide:**\n- Film it.\n".to_string())
        });
        assert_eq!(
            generator.generate_description("Watch this!").unwrap(),
            "**Shooting Guide:**\n- Film it."
        );
    }

    #[test]
    fn blank_description() {
        let generator = Generator::new(reply(" \n "));
        assert!(matches!(
            generator.generate_description("hook"),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn remote_failure_propagates() {
        let generator = Generator::new(|_: &str| -> Reply {
            Err(GenerationError::Status {
                status: 503,
                body: "overloaded".to_string(),
            })
        });
        assert!(matches!(
            generator.generate_hooks("idea"),
            Err(GenerationError::Status { status: 503, .. })
        ));
    }

    #[test]
    fn missing_api_key() {
        let config = ModelConfig {
            api_key_env: "REELGENIUS_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..ModelConfig::default()
        };
        assert!(matches!(
            ChatClient::from_config(&config),
            Err(GenerationError::MissingApiKey(name)) if name == "REELGENIUS_TEST_KEY_THAT_IS_NEVER_SET"
        ));
    }
}
