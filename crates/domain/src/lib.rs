pub mod aggregates;
pub mod builders;
pub mod entities;
pub mod error;
pub mod ports;
pub mod prototype;
pub mod value_objects;

pub use aggregates::{Character, Report};
pub use builders::{ReportBuilder, TextReportBuilder};
pub use entities::{Armor, Weapon};
pub use error::DomainError;
pub use ports::{RenderError, RenderSink};
pub use prototype::Prototype;
pub use value_objects::{Attributes, ReportStyle, Section, SectionName};
