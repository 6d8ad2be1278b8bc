//! Metadata filter handling: normalization into the canonical form, then
//! compilation into the store's `$eq` / `$or` expression syntax.

mod compile;
mod normalize;

pub use compile::compile;
pub use normalize::normalize;
