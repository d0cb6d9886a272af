//! Octave reference lines
//!
//! Markers sit at successive doublings and halvings of concert A, which puts
//! them exactly 12 units apart on the axis.

use super::{project, NoteName, REFERENCE_FREQ};

/// Lowest marker exponent (440 / 256 Hz, about 1.7 Hz)
pub const MIN_OCTAVE: i32 = -8;
/// Highest marker exponent (440 * 65536 Hz, about 28.8 MHz)
pub const MAX_OCTAVE: i32 = 16;

/// A horizontal guide line at `440 * 2^exponent` Hz
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OctaveMarker {
    /// Power of two applied to the reference frequency
    pub exponent: i32,
    /// Frequency in Hz
    pub frequency: f64,
    /// Position on the semitone axis
    pub position: f64,
    /// Name of the note at `position` (A3, A4, ...)
    pub label: String,
}

impl OctaveMarker {
    /// `exponent` must lie in `MIN_OCTAVE..=MAX_OCTAVE`
    fn new(exponent: i32) -> Self {
        let frequency = REFERENCE_FREQ * 2f64.powi(exponent);
        let position = project(frequency);
        Self {
            exponent,
            frequency,
            position,
            label: NoteName::nearest(position).to_string(),
        }
    }
}

/// One marker per exponent in `low_exponent..=high_exponent`, lowest first.
///
/// Exponents outside [`MIN_OCTAVE`]`..=`[`MAX_OCTAVE`] are left out. Returns
/// an empty list when `low_exponent > high_exponent`.
pub fn octave_markers(low_exponent: i32, high_exponent: i32) -> Vec<OctaveMarker> {
    let markers: Vec<_> = (low_exponent.max(MIN_OCTAVE)..=high_exponent.min(MAX_OCTAVE))
        .map(OctaveMarker::new)
        .collect();
    tracing::debug!(
        low_exponent,
        high_exponent,
        count = markers.len(),
        "built octave markers"
    );
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_has_nine_markers() {
        let markers = octave_markers(-1, 7);
        assert_eq!(markers.len(), 9);

        for (marker, e) in markers.iter().zip(-1..=7) {
            assert_eq!(marker.exponent, e);
            assert_eq!(marker.frequency, 440.0 * 2f64.powi(e));
        }
    }

    #[test]
    fn positions_are_twelve_apart() {
        let markers = octave_markers(-1, 7);
        for pair in markers.windows(2) {
            assert!(pair[1].position > pair[0].position);
            assert!((pair[1].position - pair[0].position - 12.0).abs() < 1e-9);
        }
        assert_eq!(markers[1].position, 49.0);
    }

    #[test]
    fn labels_name_the_reference_pitch() {
        let labels: Vec<_> = octave_markers(-1, 7)
            .into_iter()
            .map(|m| m.label)
            .collect();
        assert_eq!(
            labels,
            ["A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10", "A11"]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(octave_markers(3, 2).is_empty());
        assert_eq!(octave_markers(0, 0).len(), 1);
    }

    #[test]
    fn exponents_outside_bounds_are_dropped() {
        // 440 * 2^1100 overflows to infinity, 440 * 2^-1100 underflows to 0
        assert!(octave_markers(1100, 1100).is_empty());
        assert!(octave_markers(-1100, -1100).is_empty());

        let markers = octave_markers(i32::MIN, i32::MAX);
        assert_eq!(markers.len(), (MAX_OCTAVE - MIN_OCTAVE + 1) as usize);
        assert_eq!(markers[0].exponent, MIN_OCTAVE);
        assert_eq!(markers[markers.len() - 1].exponent, MAX_OCTAVE);
        assert!(markers
            .iter()
            .all(|m| m.frequency.is_finite() && m.frequency > 0.0));

        let clipped = octave_markers(-3, 1000);
        assert_eq!(clipped.first().map(|m| m.exponent), Some(-3));
        assert_eq!(clipped.last().map(|m| m.label.as_str()), Some("A20"));
    }
}
