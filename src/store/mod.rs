//! Latest-value holder for the product screen.
//!
//! [`StateCell`] keeps the most recent value and pushes every new one to its
//! subscribers in order. [`ProductStore`] owns a cell of
//! [`RenderState`](crate::render::RenderState) and runs fetches into it.

mod cell;
mod product_store;

pub use cell::{StateCell, Subscription};
pub use product_store::{FetchStart, ProductStore};
