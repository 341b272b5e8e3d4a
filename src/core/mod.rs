//! Core module containing the validation-and-persistence abstractions
//!
//! Nothing in here knows about HTTP; the server layer translates the typed
//! outcomes of this module into responses.

pub mod entity;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod validation;

pub use entity::{Entity, Payload};
pub use error::{StorageError, WriteError};
pub use pipeline::WritePipeline;
pub use store::{EntityStore, WalksRepository};
pub use validation::{ReferenceCheck, Validate, Violation, Violations};
