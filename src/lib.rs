//! Library interface for fruity, a cached FruityVice client
//!
//! [`FruitApi`] is the entry point: single lookups are cached for the life of
//! the client, while catalog and family listings always go to the network.

pub mod api;
pub mod cache;
pub mod colors;
pub mod commands;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod fruit;
pub mod keywords;
pub mod transport;

// Re-export commonly used types
pub use api::FruitApi;
pub use config::Config;
pub use error::{FruityError, LookupError, Result};
pub use format::{OutputFormat, format_fruit};
pub use fruit::{Fruit, Nutrition};
pub use keywords::is_reserved_keyword;
pub use transport::{HttpTransport, Transport, TransportError};
