//! Convert module — applies one compiled pattern to a text file, line by
//! line, and accumulates counts plus a capped sample of extractions.

pub mod file;
pub mod line;
pub mod model;

pub use file::convert_file;
pub use line::convert_line;
pub use model::{ConversionResult, Extraction, SAMPLE_CAP};
