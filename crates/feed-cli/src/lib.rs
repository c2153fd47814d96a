//! CLI library components for the feed converter.

#![allow(missing_docs)]

pub mod convert;
pub mod logging;
