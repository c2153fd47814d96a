//! Product feed output generation.
//!
//! Serializes a validated [`feed_model::FeedDocument`] as an RSS 2.0 product
//! feed and writes it to disk in a single step.

mod file;
mod xml;

pub use file::write_feed;
pub use xml::render_feed;
