pub mod chart; // Renderer-ready bars, gridlines and display settings
pub mod instruments;
pub mod pitch; // Frequency <-> semitone axis

pub use chart::{ChartConfig, ChartData};
pub use instruments::{build_table, try_build_table, InstrumentRange, InstrumentSpec};
pub use pitch::{octave_markers, project, OctaveMarker};
