//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Never shares a part with another aggregate
//!
//! # Rustic DDD Principles
//!
//! | Classic Pattern | Rustic Equivalent |
//! |-----------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Builder pattern | `ReportBuilder` trait + `with_*` methods |
//! | Prototype pattern | `Prototype::try_clone` over owned parts |

pub mod character;
pub mod report;

pub use character::Character;
pub use report::Report;
