use serde::{Deserialize, Serialize};

// --- Request Structures ---

/// One text to embed.
///
/// When `embedding` is set the caller brings its own vector and the server
/// does not recompute it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InputItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl InputItem {
    pub fn new(text: impl Into<String>) -> Self {
        InputItem {
            text: text.into(),
            embedding: None,
        }
    }

    pub fn with_embedding(text: impl Into<String>, embedding: Vec<f32>) -> Self {
        InputItem {
            text: text.into(),
            embedding: Some(embedding),
        }
    }

    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}

impl From<&str> for InputItem {
    fn from(text: &str) -> Self {
        InputItem::new(text)
    }
}

impl From<String> for InputItem {
    fn from(text: String) -> Self {
        InputItem::new(text)
    }
}

impl From<&String> for InputItem {
    fn from(text: &String) -> Self {
        InputItem::new(text.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingRequest {
    pub inputs: Vec<InputItem>,
    pub model: String,
    pub language: String,
    pub semantic_weight: f32,
}

// --- Response Structures ---

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub total_tokens: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmbeddingDatum {
    pub text: String,
    pub embedding: Vec<f32>,
    #[serde(default)]
    pub usage: Usage,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingResponse {
    pub payload: Vec<EmbeddingDatum>,
    pub model: String,
    #[serde(default)]
    pub total_usage: Usage,
}

impl EmbeddingResponse {
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Dimensionality of the returned vectors, read from the first datum.
    pub fn dimensions(&self) -> Option<usize> {
        self.payload.first().map(|datum| datum.embedding.len())
    }

    pub fn embeddings(&self) -> impl Iterator<Item = &[f32]> {
        self.payload.iter().map(|datum| datum.embedding.as_slice())
    }

    pub fn into_embeddings(self) -> Vec<Vec<f32>> {
        self.payload.into_iter().map(|datum| datum.embedding).collect()
    }
}

// --- Error Envelope ---

/// Body returned by the API on failure: `{error, message, statusCode, details?}`.
///
/// Every field is optional on decode; proxies in front of the API do not
/// always answer with the full envelope.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Human readable message: `message` first, then the `error` code.
    pub fn display_message(&self) -> Option<String> {
        let non_blank = |m: &&str| !m.trim().is_empty();
        self.message
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.error.as_deref().filter(non_blank))
            .map(str::to_string)
    }
}
