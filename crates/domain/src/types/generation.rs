//! AI generation requests and the metadata stored on generated content

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

const DEFAULT_IMAGE_STYLE: &str = "realistic";
const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
const DEFAULT_RENDER_STYLE: &str = "natural";
const DEFAULT_TRANSITION: &str = "fade";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationResult {
    pub status: String,
    pub image_url: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCompositionRequest {
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCompositionResult {
    pub status: String,
    pub video_url: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// `content_metadata` for an item produced by text-to-image generation.
pub fn image_generation_metadata(
    prompt: &str,
    style: Option<&str>,
    size: Option<&str>,
    generated_at: DateTime<Utc>,
) -> Value {
    let style = style.filter(|s| !s.is_empty());
    let size = size.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_IMAGE_SIZE);

    json!({
        "type": "image_generation",
        "prompt": prompt,
        "style": style.unwrap_or(DEFAULT_IMAGE_STYLE),
        "size": size,
        "generated_at": generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "engine": "dall-e-3",
        "parameters": {
            "quality": "standard",
            "style": style.unwrap_or(DEFAULT_RENDER_STYLE),
        }
    })
}

/// `content_metadata` for a slideshow video composed from still images.
pub fn video_composition_metadata(
    images: &[String],
    duration_per_image: f64,
    transition: Option<&str>,
    generated_at: DateTime<Utc>,
) -> Value {
    let transition = transition.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TRANSITION);

    json!({
        "type": "video_composition",
        "image_count": images.len(),
        "duration_per_image": duration_per_image,
        "total_duration": duration_per_image * images.len() as f64,
        "transition_effect": transition,
        "generated_at": generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "engine": "ffmpeg",
        "parameters": {
            "fps": 30,
            "codec": "h264",
            "quality": "high",
        }
    })
}
