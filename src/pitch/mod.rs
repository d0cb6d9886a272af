//! Pitch coordinates
//!
//! Frequencies are placed on a continuous piano-key axis: 12 units per
//! octave, with concert A (440 Hz) at key 49. Note names and octave
//! reference lines live on the same axis.

mod note;
pub mod octave;
mod projection;

pub use note::{Accidental, NoteName, NoteParseError};
pub use octave::{octave_markers, OctaveMarker, MAX_OCTAVE, MIN_OCTAVE};
pub use projection::{
    frequency_of, project, try_project, PitchError, REFERENCE_FREQ, REFERENCE_KEY,
    SEMITONES_PER_OCTAVE,
};
