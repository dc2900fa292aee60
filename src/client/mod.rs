//! Product fetching.
//!
//! [`ProductSource`] is the seam between the render machinery and the
//! network: the machinery only needs "give me the product text or tell me
//! why not". [`ProductClient`] is the HTTP implementation used by the
//! application; tests substitute their own sources.

mod error;
mod product;

use std::future::Future;

pub use error::{BoxError, ErrorKind, FetchError};
pub use product::ProductClient;

/// Something that can produce the product text.
///
/// Each call performs exactly one attempt. Retrying is the caller's decision.
pub trait ProductSource: Send + Sync + 'static {
    fn fetch_product(&self) -> impl Future<Output = Result<String, FetchError>> + Send;
}

