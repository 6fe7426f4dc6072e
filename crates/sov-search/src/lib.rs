//! Result acquisition from web and video search providers.
//!
//! Both sources go through Apify actors and are normalised into
//! [`sov_core::ResultRecord`]s. [`collect_records`] gathers both, video
//! first, and keeps going when one source fails.

pub mod client;
pub mod collect;
pub mod error;
pub mod normalize;
pub mod types;

mod retry;

pub use client::ApifyClient;
pub use collect::{collect_records, SearchRequest};
pub use error::SearchError;
