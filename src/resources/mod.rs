mod event;
mod fields;
mod generic;

pub use event::Event;
pub use generic::GenericResource;

use crate::error::ApiResult;

/// Contract a model must satisfy to be submitted as an HTTP request body.
///
/// The surrounding API client calls `raw_body` for the payload and
/// `content_type` for the request's Content-Type header; nothing here
/// performs I/O.
pub trait Resource {
    /// Serialize into the request body payload
    fn raw_body(&self) -> ApiResult<String>;

    /// Value for the request's Content-Type header
    fn content_type(&self) -> &'static str;
}
