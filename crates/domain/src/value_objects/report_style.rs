//! Report style value object
//!
//! Visual settings applied to a whole report. Styles are replaced wholesale,
//! never edited in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Background color, font color and font size for a report
///
/// # Invariants
///
/// - `font_size` is always greater than zero (enforced by `new`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ReportStyleData")]
pub struct ReportStyle {
    background_color: String,
    font_color: String,
    font_size: u32,
}

impl ReportStyle {
    /// Create a new style.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `font_size` is zero.
    pub fn new(
        background_color: impl Into<String>,
        font_color: impl Into<String>,
        font_size: u32,
    ) -> Result<Self, DomainError> {
        if font_size == 0 {
            return Err(DomainError::invalid_argument(
                "Font size must be greater than zero",
            ));
        }
        Ok(Self {
            background_color: background_color.into(),
            font_color: font_color.into(),
            font_size,
        })
    }

    #[inline]
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    #[inline]
    pub fn font_color(&self) -> &str {
        &self.font_color
    }

    #[inline]
    pub fn font_size(&self) -> u32 {
        self.font_size
    }
}

/// Renders the one-line style summary used by report exports.
impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "backgroundColor={}, fontColor={}, fontSize={}",
            self.background_color, self.font_color, self.font_size
        )
    }
}

/// Unvalidated wire shape, checked through `ReportStyle::new` on deserialize.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportStyleData {
    background_color: String,
    font_color: String,
    font_size: u32,
}

impl TryFrom<ReportStyleData> for ReportStyle {
    type Error = DomainError;

    fn try_from(data: ReportStyleData) -> Result<Self, Self::Error> {
        Self::new(data.background_color, data.font_color, data.font_size)
    }
}
