//! mazepath CLI library.
//!
//! This crate provides command-line interface utilities for the mazepath
//! search engine, chiefly output formatting.

pub mod output;
