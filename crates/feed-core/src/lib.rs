//! Product feed construction.

pub mod builder;

pub use builder::{FeedBuilder, build_feed};
