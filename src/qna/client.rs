use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::ResolvedConfig;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Debug, Serialize)]
struct QuestionRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnswersResponse {
    answers: Vec<AnswerEntry>,
}

#[derive(Debug, Deserialize)]
struct AnswerEntry {
    answer: String,
}

/// Client for the knowledge base query endpoint.
///
/// Stateless: each call is a single POST carrying one question.
pub struct QnaClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl QnaClient {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.qna_endpoint.clone(),
            api_key: config.qna_key.clone(),
        }
    }

    /// Sends the question and returns the top-ranked answer text.
    ///
    /// A non-2xx status is folded into a displayable `Error: <reason>`
    /// string so the session keeps running. A 2xx body that does not
    /// carry `answers[0].answer` is a malformed-response error.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let request = QuestionRequest { question };

        let response = self
            .client
            .post(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to reach question answering endpoint: {}",
                    self.endpoint
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Ok(http_error_sentinel(status));
        }

        let body = response
            .text()
            .await
            .context("Failed to read question answering response body")?;

        extract_answer(&body)
    }
}

/// Displayable stand-in for a failed request, e.g. `Error: Unauthorized`.
fn http_error_sentinel(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Error: {reason}"),
        None => format!("Error: {}", status.as_str()),
    }
}

/// Pulls `answers[0].answer` out of a response body.
fn extract_answer(body: &str) -> Result<String> {
    let parsed: AnswersResponse =
        serde_json::from_str(body).context("Malformed question answering response")?;

    parsed
        .answers
        .into_iter()
        .next()
        .map(|entry| entry.answer)
        .context("Malformed question answering response: empty answers list")
}
