#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`CpeError`)
//! - [`config`]: Parser configuration (`ParserConfig`, builder)
//! - [`types`]: Domain types (`Cpe`, `Part`, `Dialect`)
//! - [`parser`]: Dialect dispatch and the two parse paths (`parse`, `parse_with`, `detect`)
//! - [`serializer`]: CPE 2.2 URI serialization (`to_uri_string`)
//!
//! # Architecture
//!
//! ```text
//! input string --> detect (prefix) --+--> uri parser (2.2) ------+
//!                                    |     split ':'             |
//!                                    |     well_formed           +--> Cpe
//!                                    |     unpack_edition        |
//!                                    +--> formatted parser (2.3)-+
//!                                          escape-aware tokens
//!                                          positional slot table
//!
//! Cpe --> to_uri_string --> "cpe:/..." (2.2 direction only)
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod types;

// --- Public API Re-exports ---

// Parsing
pub use parser::{FORMATTED_PREFIX, URI_PREFIX, detect, parse, parse_with};

// Serialization
pub use serializer::to_uri_string;

// Configuration
pub use config::{ParserConfig, ParserConfigBuilder};

// Error
pub use error::CpeError;

// Types
pub use types::{Cpe, Dialect, Part};
