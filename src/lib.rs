pub mod blocking;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod http;
mod http_client;
pub mod input;
pub mod options;
pub mod utils;

pub use client::NeuraLexClient;
pub use config::ClientConfig;
pub use errors::{ClientError, ErrorKind};
pub use http::*;
pub use input::EmbedInput;
pub use options::EmbedOptions;
pub use constants::*;
