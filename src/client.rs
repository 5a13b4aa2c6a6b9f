//! BitMind API client
//!
//! One POST per call, bearer-authenticated, JSON in and out. There is no
//! retry and no timeout beyond the transport default.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result type for API calls
type Result<T> = std::result::Result<T, ApiError>;

/// Label used in image detection errors and logs
pub const BITMIND_SERVICE: &str = "BitMind";

/// Label used in URL scoring errors and logs
pub const TRINITY_SERVICE: &str = "Trinity Matrix";

/// Remote endpoint URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Deepfake detection subnet
    pub detect_image: String,
    /// Trinity Matrix influence scoring
    pub ai_score: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            detect_image: "https://subnet-api.bitmindlabs.ai/detect-image".to_string(),
            ai_score: "https://trinity-api.bitmindlabs.ai/ai-score".to_string(),
        }
    }
}

/// Image detection verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDetection {
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    /// Confidence of AI generation, 0..1
    pub confidence: f64,
}

/// URL influence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceScore {
    /// AI influence, 0..1
    pub score: f64,
}

#[derive(Serialize)]
struct DetectImageRequest<'a> {
    image: &'a str,
}

#[derive(Serialize)]
struct AiScoreRequest<'a> {
    url: &'a str,
}

/// HTTP client for both BitMind services
#[derive(Debug, Clone)]
pub struct BitmindClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl BitmindClient {
    /// Create a client for the given endpoints
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("bitmind-actions/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self::with_http(http, endpoints))
    }

    /// Create a client around an existing reqwest client
    pub fn with_http(http: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Ask the detection subnet whether an image is AI-generated
    pub async fn detect_image(&self, token: &str, image_url: &str) -> Result<ImageDetection> {
        self.post(
            BITMIND_SERVICE,
            &self.endpoints.detect_image,
            token,
            &DetectImageRequest { image: image_url },
        )
        .await
    }

    /// Score a URL for AI influence
    pub async fn ai_score(&self, token: &str, url: &str) -> Result<InfluenceScore> {
        self.post(
            TRINITY_SERVICE,
            &self.endpoints.ai_score,
            token,
            &AiScoreRequest { url },
        )
        .await
    }

    /// Send one JSON POST and decode the reply
    async fn post<B, T>(&self, service: &'static str, endpoint: &str, token: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("{}: POST {}", service, endpoint);

        let response = self
            .http
            .post(endpoint)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                service,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
