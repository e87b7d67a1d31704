//! Resource models for the Livestream HTTP API.
//!
//! This crate covers the data half of an API client: building the JSON
//! request bodies for event create/update calls and adopting decoded
//! response objects back into resource values. Transport, authentication
//! and response error handling belong to the surrounding client.

pub mod error;
pub mod resources;
pub mod utils;

pub use error::{ApiResult, Error};
pub use resources::{Event, GenericResource, Resource};
