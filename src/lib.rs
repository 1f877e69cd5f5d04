//! Local metrics sink for a host stats SDK.
//!
//! This crate buffers timing samples per (metric, tag-set) pair for the
//! lifetime of the process and renders one latency histogram per metric at
//! an explicit shutdown call, either as ASCII panels on stdout or as a
//! single SVG or PNG file, selected by a destination descriptor string.
//! Counter, gauge, histogram-typed, informational, and error events are
//! accepted for interface compatibility and deliberately ignored.
pub mod charts;
pub mod collector;
pub mod config;
pub mod error;
pub mod logger;
pub mod store;
