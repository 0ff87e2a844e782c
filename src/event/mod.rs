//! Inbound event subsystem.
//!
//! # Data Flow
//! ```text
//! gateway JSON
//!     → payload.rs (TriggerEvent: typed TriggerPayload + raw JSON)
//!     → context.rs (InvocationContext from the runtime)
//!     → http::RequestBuilder
//! ```
//!
//! # Design Decisions
//! - Payload is read-only; nothing in the adapter mutates it
//! - Optional fields deserialize to `None`, defaults are applied later from config
//! - Raw JSON kept behind `Arc` so requests share it instead of copying

pub mod context;
pub mod payload;

pub use context::InvocationContext;
pub use payload::{
    Identity, MultiValue, PayloadBody, RequestContext, SingleValue, TriggerEvent, TriggerPayload,
};
