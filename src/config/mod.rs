//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AdapterConfig (validated, immutable)
//!     → RequestDefaults handed to the request builder
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Every payload default is declared once, in `RequestDefaults`
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, override_log_level, parse_config, ConfigError};
pub use schema::AdapterConfig;
pub use schema::ObservabilityConfig;
pub use schema::RequestDefaults;
pub use validation::ValidationError;
