// Itinerary domain: the preference set gathered from the user, the prompt
// sent to the model and the plain-text file written when the user saves.
// Everything here is pure so it can be tested without a terminal or server.

use serde::Serialize;

pub const DEFAULT_MODEL: &str = "llama3.2:1b";
pub const DEFAULT_FILENAME: &str = "bali_itinerary.txt";
pub const NO_RESPONSE: &str = "No response received";
pub const ITINERARY_BANNER: &str = "===== YOUR PERSONALIZED BALI ITINERARY =====";

/// The five free-text answers that shape the itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub travel_style: String,
    pub interests: String,
    pub accommodation: String,
    pub budget: String,
    pub special_requests: String,
}

/// Body of `POST /api/generate`. Streaming is always disabled so the
/// server answers with a single JSON object.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: &str, prompt: String) -> Self {
        GenerateRequest {
            model: model.to_string(),
            prompt,
            stream: false,
        }
    }
}

impl Preferences {
    /// Build the natural-language request for a two-day itinerary.
    pub fn to_prompt(&self) -> String {
        format!(
            r#"
Create a detailed two-day itinerary for Bali, Indonesia based on the following preferences:

- Travel Style: {style}
- Main Interests: {interests}
- Accommodation Location: {stay}
- Budget Level: {budget}
- Special Requests: {requests}

Include specific recommendations for:
- Morning activities
- Lunch spots with cuisine style
- Afternoon activities
- Dinner restaurants
- Evening entertainment

For each recommendation, provide:
1. The name of the place/activity
2. A brief description
3. Approximate cost if relevant
4. Travel time from {stay} if applicable

Format the itinerary in a clear, organized way with DAY 1 and DAY 2 clearly labeled.
"#,
            style = self.travel_style,
            interests = self.interests,
            stay = self.accommodation,
            budget = self.budget,
            requests = self.special_requests,
        )
    }

    /// Contents of the saved itinerary file: banner, one `label: value`
    /// line per preference, a blank line, then the generated text verbatim.
    pub fn render_saved(&self, itinerary: &str) -> String {
        let mut out = String::new();
        out.push_str(ITINERARY_BANNER);
        out.push_str("\n\n");
        out.push_str(&format!("Travel Style: {}\n", self.travel_style));
        out.push_str(&format!("Main Interests: {}\n", self.interests));
        out.push_str(&format!("Accommodation: {}\n", self.accommodation));
        out.push_str(&format!("Budget Level: {}\n", self.budget));
        out.push_str(&format!("Special Requests: {}\n\n", self.special_requests));
        out.push_str(itinerary);
        out
    }
}

/// Empty answers fall back to the default model.
pub fn model_or_default(answer: &str) -> String {
    if answer.is_empty() {
        DEFAULT_MODEL.to_string()
    } else {
        answer.to_string()
    }
}

/// Only `y` or `Y` confirms; anything else, `yes` included, declines.
pub fn wants_save(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

/// Pull the generated text out of a successful response body. A missing
/// field or a body that is not JSON yields the placeholder.
pub fn extract_response(body: &str) -> String {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("generate response is not valid JSON: {}", e);
            return NO_RESPONSE.to_string();
        }
    };
    match value.get("response") {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => NO_RESPONSE.to_string(),
    }
}
