//! Value objects - immutable types compared by their fields
//!
//! Value objects have no identity. Two values with the same fields are the
//! same value, so they derive `PartialEq` and are replaced rather than mutated.

mod attributes;
mod names;
mod report_style;
mod section;

pub use attributes::Attributes;
pub use names::SectionName;
pub use report_style::ReportStyle;
pub use section::Section;
