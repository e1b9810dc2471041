pub mod client;
pub mod error;
pub mod filter;
pub mod merge;
pub mod pipeline;
mod retry;
pub mod suppliers;

pub use client::SupplierClient;
pub use error::SupplyError;
pub use filter::filter_catalog;
pub use merge::{merge_catalog, merge_hotels};
pub use pipeline::run_catalog;
pub use suppliers::{normalizer_for, SupplierNormalizer};
