use crate::core::{AdvisorSettings, AdvisoryService, Category};
use crate::utils::error::{Result, SalonError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// [`AdvisoryService`] backed by the Gemini `generateContent` REST call.
pub struct GeminiAdvisor {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: Option<f32>,
    system_prompt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GeminiAdvisor {
    pub fn new<C: AdvisorSettings>(settings: &C, brand_name: &str, catalog: &[Category]) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint().trim_end_matches('/').to_string(),
            model: settings.model().to_string(),
            api_key: settings.api_key().to_string(),
            temperature: settings.temperature(),
            system_prompt: build_system_prompt(brand_name, catalog),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

#[async_trait]
impl AdvisoryService for GeminiAdvisor {
    async fn request_advice(&self, query: &str) -> Result<String> {
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &self.system_prompt,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: query }],
            }],
            generation_config: self.temperature.map(|temperature| GenerationConfig { temperature }),
        };

        tracing::debug!("Making advisory request to: {}", self.url());
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Advisory response status: {}", status);
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(SalonError::UpstreamError {
                status: status.as_u16(),
                message,
            });
        }

        extract_advice(&text)
    }
}

/// Joins the text parts of the first candidate.
fn extract_advice(body: &str) -> Result<String> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| SalonError::MalformedResponse {
            message: format!("invalid JSON: {}", e),
        })?;

    let advice: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let advice = advice.trim();
    if advice.is_empty() {
        return Err(SalonError::MalformedResponse {
            message: "response contained no text".to_string(),
        });
    }
    Ok(advice.to_string())
}

/// Persona and menu handed to the model, so recommendations come from the
/// studio's own price list.
pub fn build_system_prompt(brand_name: &str, catalog: &[Category]) -> String {
    let mut prompt = format!(
        "Je bent de persoonlijke stijladviseur van {}, een studio gespecialiseerd in \
         Afro en getextureerd haar (4A-4C). Beveel op basis van het haartype en de \
         gelegenheid van de klant een of twee stijlen uit het menu hieronder aan, \
         met de prijs. Antwoord kort (maximaal drie zinnen), warm en in het Nederlands.",
        brand_name
    );

    if !catalog.is_empty() {
        prompt.push_str("\n\nMenu:");
        for category in catalog {
            for service in &category.items {
                prompt.push_str(&format!(
                    "\n- {}: {} ({})",
                    category.title, service.name, service.price
                ));
                if let Some(description) = &service.description {
                    prompt.push_str(&format!(" - {}", description));
                }
            }
        }
    }

    prompt
}
