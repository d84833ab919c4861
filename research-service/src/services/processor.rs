//! Content processor: prompt construction, the generation call and text
//! extraction.
//!
//! Each call to [`ContentProcessor::process`] runs a strictly sequential
//! prompt -> envelope -> POST -> parse chain. The processor keeps no state
//! between calls apart from its configuration, so one instance is shared by
//! all requests.

use crate::dtos::ResearchRequest;
use crate::services::gemini::{parse_response, GenerateContentRequest, GenerateContentResponse};
use crate::services::transport::{GenerationTransport, TransportError};
use secrecy::{ExposeSecret, Secret};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Returned when the response is valid JSON but carries no text.
pub const FALLBACK_TEXT: &str = "No response text available.";

const SUMMARIZE_INSTRUCTION: &str = "You are an expert research assistant. Carefully read the following content and generate a clear, concise, and insightful summary that captures the key ideas and intent: ";

const SUGGEST_INSTRUCTION: &str = "You are a domain expert tasked with generating thoughtful and practical suggestions based on the following content. Analyze the context, identify challenges or gaps, and propose meaningful, actionable ideas to improve or enhance the subject matter: ";

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Unknown operation: {0}")]
    InvalidOperation(String),

    #[error("Generation API call failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to parse or extract text from Gemini response: {0}")]
    ResponseParse(#[source] serde_json::Error),
}

/// Instruction mode selecting the prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Summarize,
    Suggest,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Suggest => "suggest",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Operation::Summarize => SUMMARIZE_INSTRUCTION,
            Operation::Suggest => SUGGEST_INSTRUCTION,
        }
    }
}

impl FromStr for Operation {
    type Err = ProcessError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarize" => Ok(Operation::Summarize),
            "suggest" => Ok(Operation::Suggest),
            other => Err(ProcessError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instruction followed by the content, untouched.
pub fn build_prompt(operation: Operation, content: &str) -> String {
    let instruction = operation.instruction();
    let mut prompt = String::with_capacity(instruction.len() + content.len());
    prompt.push_str(instruction);
    prompt.push_str(content);
    prompt
}

/// Pull the generated text out of a raw response body.
///
/// A body that parses but lacks any link of
/// `candidates[0].content.parts[0].text` (including a bare `null`) yields
/// [`FALLBACK_TEXT`]. A body that does not parse is an error.
pub fn extract_text(raw: &str) -> Result<String, ProcessError> {
    let envelope = parse_response(raw).map_err(ProcessError::ResponseParse)?;

    Ok(envelope
        .and_then(GenerateContentResponse::into_first_text)
        .unwrap_or_else(|| FALLBACK_TEXT.to_string()))
}

pub struct ContentProcessor {
    transport: Arc<dyn GenerationTransport>,
    api_url: String,
    api_key: Secret<String>,
}

impl ContentProcessor {
    pub fn new(
        transport: Arc<dyn GenerationTransport>,
        api_url: impl Into<String>,
        api_key: Secret<String>,
    ) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
            api_key,
        }
    }

    /// Both the URL and the key are non-empty.
    pub fn is_configured(&self) -> bool {
        !self.api_url.is_empty() && !self.api_key.expose_secret().is_empty()
    }

    /// The key is appended as-is; the configured URL supplies any `?key=`.
    fn endpoint(&self) -> String {
        format!("{}{}", self.api_url, self.api_key.expose_secret())
    }

    pub async fn process(&self, request: &ResearchRequest) -> Result<String, ProcessError> {
        let operation: Operation = request.operation.parse()?;
        let prompt = build_prompt(operation, &request.content);
        let body = GenerateContentRequest::from_prompt(prompt);

        let raw = self.transport.send(&self.endpoint(), &body).await?;

        extract_text(&raw)
    }
}
