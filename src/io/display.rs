//! Output sinks that render classification labels.

use crate::core::Classification;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur while rendering a label
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Failed to write label '{label}': {source}")]
    Write {
        label: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for classification labels.
///
/// Sinks hold no classifier state and never change it.
pub trait OutputSink {
    /// Replace the displayed label.
    fn show(&mut self, label: &'static str) -> Result<(), DisplayError>;

    /// Render a classification; `NoOutput` is a guaranteed no-op.
    fn render(&mut self, classification: Classification) -> Result<(), DisplayError> {
        match classification.label() {
            Some(label) => self.show(label),
            None => Ok(()),
        }
    }
}

/// Width of the label region, wide enough for every label.
pub const LABEL_WIDTH: usize = 9;

/// In-memory fixed-width text region.
///
/// Each update clears the whole region before writing, so a shorter label
/// never leaves characters of a longer one behind.
///
/// # Example
///
/// ```rust
/// use pressfsm::core::Classification;
/// use pressfsm::io::{LabelDisplay, OutputSink};
///
/// let mut display = LabelDisplay::new();
/// display.render(Classification::Right).unwrap();
/// display.render(Classification::NoOutput).unwrap();
/// assert_eq!(display.text(), "right");
/// assert_eq!(display.updates(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct LabelDisplay {
    region: [char; LABEL_WIDTH],
    updates: usize,
}

impl Default for LabelDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelDisplay {
    pub fn new() -> Self {
        Self {
            region: [' '; LABEL_WIDTH],
            updates: 0,
        }
    }

    /// Displayed text without trailing padding; empty when blank.
    pub fn text(&self) -> String {
        let text: String = self.region.iter().collect();
        text.trim_end().to_string()
    }

    pub fn is_blank(&self) -> bool {
        self.region.iter().all(|c| *c == ' ')
    }

    /// Number of labels written so far.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl OutputSink for LabelDisplay {
    fn show(&mut self, label: &'static str) -> Result<(), DisplayError> {
        self.region = [' '; LABEL_WIDTH];
        for (cell, c) in self.region.iter_mut().zip(label.chars()) {
            *cell = c;
        }
        self.updates += 1;
        Ok(())
    }
}

/// Writes each label as one line to a writer.
#[derive(Debug)]
pub struct WriterDisplay<W> {
    writer: W,
}

impl<W: Write> WriterDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterDisplay<W> {
    fn show(&mut self, label: &'static str) -> Result<(), DisplayError> {
        writeln!(self.writer, "{label}")
            .and_then(|_| self.writer.flush())
            .map_err(|source| DisplayError::Write { label, source })
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn show(&mut self, label: &'static str) -> Result<(), DisplayError> {
        (**self).show(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn new_display_is_blank() {
        let display = LabelDisplay::new();
        assert!(display.is_blank());
        assert_eq!(display.text(), "");
    }

    #[test]
    fn update_replaces_whole_label() {
        let mut display = LabelDisplay::new();
        display.render(Classification::Right).unwrap();
        display.render(Classification::None).unwrap();

        assert_eq!(display.text(), "none");
        assert_eq!(display.updates(), 2);
    }

    #[test]
    fn no_output_leaves_label_unchanged() {
        let mut display = LabelDisplay::new();
        display.render(Classification::Left).unwrap();
        for _ in 0..3 {
            display.render(Classification::NoOutput).unwrap();
        }

        assert_eq!(display.text(), "left");
        assert_eq!(display.updates(), 1);
    }

    #[test]
    fn writer_display_writes_lines() {
        let mut display = WriterDisplay::new(Vec::new());
        display.render(Classification::Left).unwrap();
        display.render(Classification::NoOutput).unwrap();
        display.render(Classification::Right).unwrap();

        let written = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(written, "left\nright\n");
    }

    #[test]
    fn writer_errors_carry_the_label() {
        let mut display = WriterDisplay::new(FailingWriter);
        let err = display.render(Classification::None).unwrap_err();

        assert!(matches!(err, DisplayError::Write { label: "none", .. }));
        assert!(err.to_string().contains("none"));
    }
}
