use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ResolvedConfig;
use crate::ui::Style;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// Displayable stand-in returned when the translation request fails.
pub const TRANSLATION_ERROR: &str = "Translation Error";

#[derive(Debug, Serialize)]
struct TranslationInput<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslationEntry {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
struct TranslatedText {
    text: String,
}

/// Client for the translate endpoint.
///
/// Stateless: each call is a single POST carrying one text to translate.
pub struct TranslatorClient {
    client: Client,
    endpoint: String,
    api_key: String,
    region: String,
}

impl TranslatorClient {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.translator_endpoint.clone(),
            api_key: config.translator_key.clone(),
            region: config.translator_region.clone(),
        }
    }

    /// Translates the text to the given target language code.
    ///
    /// The caller validates the language code; this method only appends it
    /// to the endpoint's query string. A non-2xx status prints the status
    /// and error body, then yields [`TRANSLATION_ERROR`] so the session
    /// keeps running. A 2xx body without `[0].translations[0].text` is a
    /// malformed-response error.
    pub async fn translate(&self, text: &str, language: &str) -> Result<String> {
        let url = format!("{}&to={language}", self.endpoint);
        let body = [TranslationInput { text }];

        let response = self
            .client
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header(SUBSCRIPTION_REGION_HEADER, &self.region)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to reach translation endpoint: {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            eprintln!(
                "{} Status code: {status}, Error: {error_body}",
                Style::error("Translation failed.")
            );
            return Ok(TRANSLATION_ERROR.to_string());
        }

        let response_body = response
            .text()
            .await
            .context("Failed to read translation response body")?;

        extract_translation(&response_body)
    }
}

/// Pulls `[0].translations[0].text` out of a response body.
fn extract_translation(body: &str) -> Result<String> {
    let parsed: Vec<TranslationEntry> =
        serde_json::from_str(body).context("Malformed translation response")?;

    parsed
        .into_iter()
        .next()
        .and_then(|entry| entry.translations.into_iter().next())
        .map(|translated| translated.text)
        .context("Malformed translation response: empty translations list")
}
