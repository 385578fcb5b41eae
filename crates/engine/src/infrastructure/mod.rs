//! Infrastructure: the I/O collaborators around the domain core.
//!
//! - [`logging`]: leveled logger and its failure policy
//! - [`log_store`] / [`log_reader`]: flat-file and in-memory log storage
//! - [`render`]: `io::Write` backed render sinks
//! - [`settings`]: environment configuration

pub mod error;
pub mod log_reader;
pub mod log_store;
pub mod logging;
pub mod ports;
pub mod render;
pub mod settings;

pub use error::LogError;
pub use log_reader::LogReader;
pub use log_store::{FileLogStore, MemoryLogStore};
pub use logging::{LogFailurePolicy, LogLevel, Logger};
pub use ports::LogStore;
pub use render::WriterSink;
pub use settings::{load_dotenv, EngineSettings};
