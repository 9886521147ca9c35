//! Cascade DNS Application Layer
//!
//! Ports describe what the resolution engine needs from the outside world;
//! use cases orchestrate them.
pub mod ports;
pub mod use_cases;
