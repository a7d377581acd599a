use serde::Deserialize;
use time::UtcOffset;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

/// Settings for the OpenAI-compatible endpoint that reads screenshots and rates meals.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionConfig {
    pub api_key: String,
    pub api_url: String,
    pub vision_model: String,
    pub vision_temperature: f32,
    pub vision_max_tokens: u32,
    pub diet_model: String,
    pub diet_temperature: f32,
    pub diet_max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: "https://dashscope.aliyuncs.com/compatible-mode/v1".into(),
            vision_model: "qwen-vl-max-latest".into(),
            vision_temperature: 0.1,
            vision_max_tokens: 1000,
            diet_model: "qwen-plus-latest".into(),
            diet_temperature: 0.3,
            diet_max_tokens: 1500,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub recognition: RecognitionConfig,
    pub max_upload_bytes: usize,
    /// Offset used to decide which calendar day "today" is.
    pub utc_offset: UtcOffset,
}

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "familyfit".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "familyfit-users".into()),
        };

        let defaults = RecognitionConfig::default();
        let recognition = RecognitionConfig {
            api_key: std::env::var("QWEN_API_KEY").unwrap_or_default(),
            api_url: std::env::var("QWEN_API_URL").unwrap_or(defaults.api_url),
            vision_model: std::env::var("VISION_MODEL").unwrap_or(defaults.vision_model),
            diet_model: std::env::var("DIET_MODEL").unwrap_or(defaults.diet_model),
            timeout_secs: std::env::var("RECOGNITION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.timeout_secs),
            ..defaults
        };

        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let offset_hours = std::env::var("APP_UTC_OFFSET_HOURS")
            .ok()
            .and_then(|v| v.parse::<i8>().ok())
            .unwrap_or(0);
        let utc_offset = UtcOffset::from_hms(offset_hours, 0, 0)?;

        Ok(Self {
            database_url,
            jwt,
            recognition,
            max_upload_bytes,
            utc_offset,
        })
    }
}
