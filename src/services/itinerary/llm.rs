use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::db::catalog::SpotCatalog;
use crate::models::{
    itinerary::{DayPlan, Itinerary, Stop},
    preferences::TripPreferences,
    spot::default_tips,
};
use crate::services::itinerary::interface::{ItineraryError, ItineraryStrategy};

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const SYSTEM_PROMPT: &str = "You are an expert Jordan travel planner. \
You only recommend places from the list you are given and always answer with valid JSON.";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: OPENAI_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Delegates itinerary writing to an OpenAI-compatible chat completions API.
pub struct LlmItineraryGenerator {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LlmItineraryGenerator {
    pub fn new(config: LlmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "response_format": { "type": "json_object" },
            "temperature": 0.7
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, ItineraryError> {
        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&self.build_request_body(prompt))
            .send()
            .await
            .map_err(|e| ItineraryError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ItineraryError::UpstreamUnavailable(e.to_string()))?;

        read_completion(status, &body)
    }
}

/// Check the upstream status and pull the first choice's message content out
/// of a chat completion body.
fn read_completion(status: StatusCode, body: &str) -> Result<String, ItineraryError> {
    if !status.is_success() {
        error!("Chat completion failed with status {}: {}", status, body);
        return Err(ItineraryError::UpstreamUnavailable(format!(
            "request failed with status {}",
            status
        )));
    }

    let completion: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        ItineraryError::UpstreamMalformedResponse(format!("Failed to parse response: {}", e))
    })?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| {
            ItineraryError::UpstreamMalformedResponse("response had no content".to_string())
        })
}

#[async_trait]
impl ItineraryStrategy for LlmItineraryGenerator {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn generate(
        &self,
        catalog: &SpotCatalog,
        preferences: &TripPreferences,
    ) -> Result<Itinerary, ItineraryError> {
        let prompt = build_prompt(catalog, preferences);
        info!(
            "Requesting {}-day itinerary from {}",
            preferences.days, self.config.model
        );

        let content = self.complete(&prompt).await?;
        let days = parse_itinerary_content(&content, preferences.days)?;

        Ok(Itinerary::new(preferences.days, days))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn build_prompt(catalog: &SpotCatalog, preferences: &TripPreferences) -> String {
    let interests = if preferences.interests.is_empty() {
        "no particular interests".to_string()
    } else {
        preferences.interests.join(", ")
    };

    let mut prompt = format!(
        "Plan a {}-day trip to Jordan.\n\
         Interests: {}\n",
        preferences.days, interests
    );
    if let Some(budget) = &preferences.budget {
        prompt.push_str(&format!("Budget: {}\n", budget));
    }
    prompt.push_str(&format!(
        "Include famous places: {}\n\
         Include hidden spots: {}\n\
         Include cultural experiences: {}\n\n\
         Choose only from these places:\n",
        yes_no(preferences.include_famous_places),
        yes_no(preferences.include_hidden_spots),
        yes_no(preferences.include_cultural_experiences),
    ));
    for spot in catalog.spots() {
        prompt.push_str(&format!(
            "- {} ({}): {}\n",
            spot.name, spot.category, spot.description
        ));
    }
    prompt.push_str(&format!(
        "\nUse at most 2 places per day and at most {} days. Respond with JSON shaped like \
         {{\"itinerary\": [{{\"day\": 1, \"stops\": [{{\"name\": \"...\", \"description\": \"...\", \"tips\": \"...\"}}]}}]}}.",
        preferences.days
    ));
    prompt
}

fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let body = match trimmed.find('\n') {
        Some(newline) => &trimmed[newline + 1..],
        // single line: drop the opening fence and any language tag
        None => {
            let rest = trimmed.trim_start_matches('`');
            rest.strip_prefix("json").unwrap_or(rest)
        }
    };
    body.trim_end().trim_end_matches("```").trim()
}

fn day_number(entry: &Value, position: usize) -> Option<u32> {
    match entry.get("day") {
        Some(Value::Number(n)) => n.as_u64().and_then(|d| u32::try_from(d).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        None | Some(Value::Null) => u32::try_from(position + 1).ok(),
        Some(_) => None,
    }
}

fn coerce_stop(value: &Value) -> Option<Stop> {
    let text = |v: &Value, key: &str| {
        v.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match value {
        Value::String(name) if !name.trim().is_empty() => {
            let name = name.trim().to_string();
            Some(Stop {
                tips: default_tips(&name),
                description: String::new(),
                name,
            })
        }
        Value::Object(_) => {
            let name = text(value, "name")?;
            Some(Stop {
                description: text(value, "description").unwrap_or_default(),
                tips: text(value, "tips").unwrap_or_else(|| default_tips(&name)),
                name,
            })
        }
        _ => None,
    }
}

/// Coerce a model reply into day plans for a `days`-long trip.
///
/// Accepts the reply wrapped in Markdown fences, an object holding the day
/// list under `itinerary` or `days`, or a bare list. Entries that cannot be
/// understood are dropped. Entries sharing a day are merged, and days come
/// back in ascending order.
pub fn parse_itinerary_content(content: &str, days: u32) -> Result<Vec<DayPlan>, ItineraryError> {
    let value: Value = serde_json::from_str(strip_code_fences(content)).map_err(|e| {
        ItineraryError::UpstreamMalformedResponse(format!("reply is not JSON: {}", e))
    })?;

    let entries = match &value {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("itinerary").or_else(|| map.get("days")) {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(ItineraryError::UpstreamMalformedResponse(
                    "reply has no itinerary list".to_string(),
                ))
            }
        },
        _ => {
            return Err(ItineraryError::UpstreamMalformedResponse(
                "reply has no itinerary list".to_string(),
            ))
        }
    };

    let mut by_day: BTreeMap<u32, Vec<Stop>> = BTreeMap::new();
    for (position, entry) in entries.iter().enumerate() {
        let day = match day_number(entry, position) {
            Some(day) if (1..=days).contains(&day) => day,
            _ => {
                warn!("Dropping itinerary entry {} with unusable day", position);
                continue;
            }
        };

        let stops: Vec<Stop> = entry
            .get("stops")
            .or_else(|| entry.get("activities"))
            .and_then(Value::as_array)
            .map(|raw| raw.iter().filter_map(coerce_stop).collect())
            .unwrap_or_default();

        if !stops.is_empty() {
            by_day.entry(day).or_default().extend(stops);
        }
    }

    let plans: Vec<DayPlan> = by_day
        .into_iter()
        .map(|(day, stops)| DayPlan { day, stops })
        .collect();

    if plans.is_empty() {
        return Err(ItineraryError::UpstreamMalformedResponse(
            "reply contained no usable days".to_string(),
        ));
    }

    Ok(plans)
}
