use thiserror::Error;

/// Concert pitch A, in Hz
pub const REFERENCE_FREQ: f64 = 440.0;
/// Axis position of [`REFERENCE_FREQ`] (A4 is the 49th key of a piano)
pub const REFERENCE_KEY: f64 = 49.0;
pub const SEMITONES_PER_OCTAVE: f64 = 12.0;

/// Frequencies that have no place on the pitch axis
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PitchError {
    #[error("frequency must be positive, got {0} Hz")]
    NonPositive(f64),
    #[error("frequency must be finite, got {0}")]
    NonFinite(f64),
}

/// Map a frequency in Hz to its position on the semitone axis.
///
/// `position = log2(frequency / 440) * 12 + 49`
///
/// The frequency must be positive. Use [`try_project`] for data that has not
/// been checked yet.
#[inline]
pub fn project(frequency: f64) -> f64 {
    debug_assert!(frequency > 0.0, "cannot project {frequency} Hz");
    (frequency / REFERENCE_FREQ).log2() * SEMITONES_PER_OCTAVE + REFERENCE_KEY
}

/// Checked [`project`]
pub fn try_project(frequency: f64) -> Result<f64, PitchError> {
    if !frequency.is_finite() {
        return Err(PitchError::NonFinite(frequency));
    }
    if frequency <= 0.0 {
        return Err(PitchError::NonPositive(frequency));
    }
    Ok(project(frequency))
}

/// Inverse of [`project`]: the frequency in Hz found at `position`
#[inline]
pub fn frequency_of(position: f64) -> f64 {
    REFERENCE_FREQ * ((position - REFERENCE_KEY) / SEMITONES_PER_OCTAVE).exp2()
}
