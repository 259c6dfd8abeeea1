use std::time::Duration;

// Endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.neuralex.ca";
pub const EMBED_PATH: &str = "/api/v1/embed";

// Authentication
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const API_KEY_PREFIX: &str = "nlx_";

// Request timeout constants
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

// Batch size constants
pub const MIN_INPUTS_PER_REQUEST: usize = 1;
pub const MAX_INPUTS_PER_REQUEST: usize = 100;

// Request defaults
pub const DEFAULT_MODEL: &str = "public";
pub const DEFAULT_LANGUAGE: &str = "english";
pub const DEFAULT_SEMANTIC_WEIGHT: f32 = 0.5;

// Environment variables read by `ClientConfig::from_env`
pub const API_KEY_ENV_VAR: &str = "NEURALEX_API_KEY";
pub const BASE_URL_ENV_VAR: &str = "NEURALEX_BASE_URL";
pub const TIMEOUT_MS_ENV_VAR: &str = "NEURALEX_TIMEOUT_MS";

// Error messages
pub const AUTHENTICATION_ERROR_MESSAGE_DETAIL: &str = "Invalid or missing API key";
pub const RATE_LIMIT_ERROR_MESSAGE_DETAIL: &str = "Rate limit exceeded";
