//! Patternsmith Engine library.
//!
//! The I/O side of Patternsmith: everything the domain core deliberately
//! leaves out.
//!
//! ## Structure
//!
//! - `infrastructure/` - Logger, log storage, render sinks, settings
//! - `demo` - Walkthrough driven by the `patternsmith` binary

pub mod demo;
pub mod infrastructure;

pub use demo::DemoOutcome;
