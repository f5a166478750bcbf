//! External collaborators of the classifier.
//!
//! Input sources produce one debounced press snapshot per cycle; output
//! sinks render the label of each emitted classification. Neither holds
//! classifier state.

mod display;
mod input;

pub use display::{DisplayError, LabelDisplay, OutputSink, WriterDisplay, LABEL_WIDTH};
pub use input::{ButtonSnapshot, EdgeDetector, InputSource, ScriptedInput};
