//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! RequestBuilder
//!     → observer.rs (injected RequestObserver: no-op or tracing-backed)
//!     → logging.rs (subscriber installed by the binary)
//!     → stderr (text or JSON lines)
//! ```
//!
//! # Design Decisions
//! - The core never touches process-wide logger state
//! - Structured fields on every record for machine parsing

pub mod logging;
pub mod observer;

pub use logging::init_logging;
pub use observer::{observer_for, NoopObserver, RequestObserver, TracingObserver};
