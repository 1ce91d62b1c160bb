//! Notification sinks receiving one message per missing field.
use std::io::{self, Write};

use tracing::{error, warn};

/// Receives user-facing messages emitted during validation.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

impl<F> NotificationSink for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Collects messages in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    messages: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Forwards messages to `tracing` as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, message: &str) {
        warn!(
            target: "formcheck::notify",
            notification = message,
            "Form field must be filled out"
        );
    }
}

/// Writes one line per message, e.g. to stderr.
///
/// `notify` cannot fail, so the first write error is kept and surfaced by
/// `finish`.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    written: usize,
    failure: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            failure: None,
        }
    }

    /// Number of messages successfully written.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flush the writer and report the first failed write, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.failure.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> NotificationSink for WriterSink<W> {
    fn notify(&mut self, message: &str) {
        match writeln!(self.writer, "{message}") {
            Ok(()) => self.written += 1,
            Err(err) => {
                error!(
                    target: "formcheck::notify",
                    reason = %err,
                    notification = message,
                    "Failed to write notification"
                );
                self.failure.get_or_insert(err);
            }
        }
    }
}
