use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_MODEL, DEFAULT_SEMANTIC_WEIGHT};
use crate::errors::ClientError;
use crate::http::{EmbeddingRequest, InputItem};

/// Per-call options for `embed`.
///
/// Unset fields fall back to `model="public"`, `language="english"` and
/// `semantic_weight=0.5`.
///
/// # Example
///
/// ```rust
/// use neuralex::EmbedOptions;
///
/// let options = EmbedOptions::new()
///     .with_language("french")
///     .with_semantic_weight(0.8);
/// assert_eq!(options.semantic_weight(), 0.8);
/// assert_eq!(options.model(), "public");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedOptions {
    pub model: Option<String>,
    pub language: Option<String>,
    pub semantic_weight: Option<f32>,
}

impl EmbedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Balance between term-based (0.0) and meaning-based (1.0) contribution.
    pub fn with_semantic_weight(mut self, semantic_weight: f32) -> Self {
        self.semantic_weight = Some(semantic_weight);
        self
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn semantic_weight(&self) -> f32 {
        self.semantic_weight.unwrap_or(DEFAULT_SEMANTIC_WEIGHT)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        let weight = self.semantic_weight();
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(ClientError::InvalidInput(format!(
                "semantic_weight {} is outside the allowed range [0.0, 1.0]",
                weight
            )));
        }
        Ok(())
    }

    /// Build the wire request for already-normalized inputs.
    pub(crate) fn into_request(self, inputs: Vec<InputItem>) -> Result<EmbeddingRequest, ClientError> {
        self.validate()?;
        let semantic_weight = self.semantic_weight();
        Ok(EmbeddingRequest {
            inputs,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            language: self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            semantic_weight,
        })
    }
}
