//! Instrument and voice ranges
//!
//! The embedded table is built once with [`build_table`]; rows coming from
//! anywhere else go through [`try_build_table`], which checks them first.

mod category;
mod color;
mod range;
mod table;

pub use category::Category;
pub use color::{ColorParseError, Rgb};
pub use range::{InstrumentRange, InstrumentSpec, RangeError};
pub use table::{build_table, try_build_table, TABLE};
