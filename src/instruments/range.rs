use thiserror::Error;

use super::{Category, Rgb};
use crate::pitch::{project, try_project, NoteName, NoteParseError, PitchError};

/// One row of instrument data, before positions are derived
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentSpec<'a> {
    pub name: &'a str,
    /// Lowest playable frequency (Hz)
    pub freq_min: f64,
    /// Highest playable frequency (Hz)
    pub freq_max: f64,
    pub note_min: &'a str,
    pub note_max: &'a str,
    pub category: Category,
    pub color: Rgb,
}

/// Rows rejected while building a table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("{name}: {source}")]
    Frequency {
        name: String,
        #[source]
        source: PitchError,
    },
    #[error("{name}: lowest frequency {freq_min} Hz is not below highest frequency {freq_max} Hz")]
    Inverted {
        name: String,
        freq_min: f64,
        freq_max: f64,
    },
    #[error("duplicate instrument name {0:?}")]
    DuplicateName(String),
}

/// Pitch range of one instrument or voice, placed on the semitone axis.
///
/// Deserialized rows are validated like [`InstrumentRange::from_spec`]; any
/// `y_min`/`y_max` in the input is ignored and derived again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RangeRow")
)]
pub struct InstrumentRange {
    pub name: String,
    pub freq_min: f64,
    pub freq_max: f64,
    /// Informational label, not used for placement
    pub note_min: String,
    /// Informational label, not used for placement
    pub note_max: String,
    pub category: Category,
    pub color: Rgb,
    /// `project(freq_min)`
    pub y_min: f64,
    /// `project(freq_max)`
    pub y_max: f64,
}

impl InstrumentRange {
    /// Validate a row and derive its positions.
    ///
    /// Rows with non-positive or non-finite frequencies, or with
    /// `freq_min >= freq_max`, are rejected as they are, never adjusted.
    pub fn from_spec(spec: &InstrumentSpec<'_>) -> Result<Self, RangeError> {
        let frequency_error = |source: PitchError| RangeError::Frequency {
            name: spec.name.to_string(),
            source,
        };
        try_project(spec.freq_min).map_err(frequency_error)?;
        try_project(spec.freq_max).map_err(frequency_error)?;

        if spec.freq_min >= spec.freq_max {
            return Err(RangeError::Inverted {
                name: spec.name.to_string(),
                freq_min: spec.freq_min,
                freq_max: spec.freq_max,
            });
        }

        Ok(Self::derive(spec))
    }

    /// Derive positions for a row already known to be valid
    pub(crate) fn derive(spec: &InstrumentSpec<'_>) -> Self {
        Self {
            name: spec.name.to_string(),
            freq_min: spec.freq_min,
            freq_max: spec.freq_max,
            note_min: spec.note_min.to_string(),
            note_max: spec.note_max.to_string(),
            category: spec.category,
            color: spec.color,
            y_min: project(spec.freq_min),
            y_max: project(spec.freq_max),
        }
    }

    /// Width of the range in semitones
    pub fn span(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether `frequency` (Hz) lies within the range, bounds included
    pub fn covers(&self, frequency: f64) -> bool {
        (self.freq_min..=self.freq_max).contains(&frequency)
    }

    /// Shared part of two ranges as `(low, high)` positions, if they overlap
    pub fn overlap(&self, other: &InstrumentRange) -> Option<(f64, f64)> {
        let low = self.y_min.max(other.y_min);
        let high = self.y_max.min(other.y_max);
        (low < high).then_some((low, high))
    }

    /// Parse the informational note labels
    pub fn note_names(&self) -> Result<(NoteName, NoteName), NoteParseError> {
        Ok((self.note_min.parse()?, self.note_max.parse()?))
    }
}

/// Owned form of [`InstrumentSpec`], as read from serialized data
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeRow {
    name: String,
    freq_min: f64,
    freq_max: f64,
    note_min: String,
    note_max: String,
    category: Category,
    color: Rgb,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeRow> for InstrumentRange {
    type Error = RangeError;

    fn try_from(row: RangeRow) -> Result<Self, Self::Error> {
        Self::from_spec(&InstrumentSpec {
            name: &row.name,
            freq_min: row.freq_min,
            freq_max: row.freq_max,
            note_min: &row.note_min,
            note_max: &row.note_max,
            category: row.category,
            color: row.color,
        })
    }
}
