//! Input normalization for `embed`.
//!
//! Callers may pass a single text, a single [`InputItem`], or a sequence of
//! either. [`EmbedInput`] captures those shapes at the type level and
//! [`EmbedInput::into_items`] flattens them into the list that goes on the wire.

use crate::constants::{MAX_INPUTS_PER_REQUEST, MIN_INPUTS_PER_REQUEST};
use crate::errors::ClientError;
use crate::http::InputItem;

#[derive(Debug, Clone, PartialEq)]
pub enum EmbedInput {
    Single(InputItem),
    Batch(Vec<InputItem>),
}

impl EmbedInput {
    pub fn len(&self) -> usize {
        match self {
            EmbedInput::Single(_) => 1,
            EmbedInput::Batch(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into the request list, enforcing the per-request bounds.
    pub fn into_items(self) -> Result<Vec<InputItem>, ClientError> {
        let items = match self {
            EmbedInput::Single(item) => vec![item],
            EmbedInput::Batch(items) => items,
        };
        validate_input_count(items.len())?;
        Ok(items)
    }
}

pub fn validate_input_count(count: usize) -> Result<(), ClientError> {
    if count < MIN_INPUTS_PER_REQUEST {
        return Err(ClientError::InvalidInput(
            "At least one input is required".to_string(),
        ));
    }
    if count > MAX_INPUTS_PER_REQUEST {
        return Err(ClientError::InvalidInput(format!(
            "Too many inputs: {} exceeds the maximum of {} per request",
            count, MAX_INPUTS_PER_REQUEST
        )));
    }
    Ok(())
}

impl From<InputItem> for EmbedInput {
    fn from(item: InputItem) -> Self {
        EmbedInput::Single(item)
    }
}

impl From<&str> for EmbedInput {
    fn from(text: &str) -> Self {
        EmbedInput::Single(InputItem::new(text))
    }
}

impl From<String> for EmbedInput {
    fn from(text: String) -> Self {
        EmbedInput::Single(InputItem::new(text))
    }
}

impl<T: Into<InputItem>> From<Vec<T>> for EmbedInput {
    fn from(items: Vec<T>) -> Self {
        EmbedInput::Batch(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<InputItem>, const N: usize> From<[T; N]> for EmbedInput {
    fn from(items: [T; N]) -> Self {
        EmbedInput::Batch(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<InputItem> + Clone> From<&[T]> for EmbedInput {
    fn from(items: &[T]) -> Self {
        EmbedInput::Batch(items.iter().cloned().map(Into::into).collect())
    }
}

impl FromIterator<InputItem> for EmbedInput {
    fn from_iter<I: IntoIterator<Item = InputItem>>(iter: I) -> Self {
        EmbedInput::Batch(iter.into_iter().collect())
    }
}
