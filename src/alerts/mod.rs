pub mod detector;
pub mod writer;

pub use detector::{Alert, AlertDetector, AlertKind};
pub use writer::AlertWriter;
