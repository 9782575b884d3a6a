//! Console front end.
//!
//! A trait-based abstraction over line editing, so the console messenger
//! can use rustyline locally while tests drive it with a scripted editor.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tagline_foundation::{ChannelId, Error, ErrorKind, Message, MessageId, Result, UserId};
use tagline_prompt::{AwaitOutcome, Messenger};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
///
/// Allows swapping the underlying line editor (or substituting a script in
/// tests) without changing the console messenger.
pub trait LineEditor: Send {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: DefaultEditor,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let editor =
            DefaultEditor::new().map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// A [`Messenger`] over a local line editor.
///
/// Prompts print to stdout and replies are read from the terminal. The
/// timeout passed to `await_reply` is not enforced; a terminal read blocks
/// until the user answers or closes the stream, and closing maps to
/// [`AwaitOutcome::Cancelled`].
pub struct ConsoleMessenger<E: LineEditor = RustylineEditor> {
    editor: Mutex<E>,
    next_id: AtomicU64,
}

impl ConsoleMessenger<RustylineEditor> {
    /// Creates a console messenger over a fresh rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?))
    }
}

impl<E: LineEditor> ConsoleMessenger<E> {
    /// Creates a console messenger over the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor: Mutex::new(editor),
            // Synthetic reply ids start high so they never collide with
            // ids a caller fabricates for originating messages.
            next_id: AtomicU64::new(1 << 32),
        }
    }

    /// Reads one line outside any prompt session, for a driving loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn read_line(&self, prompt: &str) -> Result<ReadResult> {
        let mut editor = self
            .editor
            .lock()
            .map_err(|_| Error::new(ErrorKind::Internal("editor lock poisoned".into())))?;
        let result = editor.read_line(prompt)?;
        if let ReadResult::Line(line) = &result {
            editor.add_history(line);
        }
        Ok(result)
    }
}

impl<E: LineEditor> Messenger for ConsoleMessenger<E> {
    fn send(&self, _channel: ChannelId, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }

    fn await_reply(&self, channel: ChannelId, author: UserId, _timeout: Duration) -> AwaitOutcome {
        let Ok(mut editor) = self.editor.lock() else {
            return AwaitOutcome::Cancelled;
        };
        match editor.read_line("> ") {
            Ok(ReadResult::Line(line)) => {
                editor.add_history(&line);
                let id = MessageId(self.next_id.fetch_add(1, Ordering::Relaxed));
                AwaitOutcome::Reply(Message::direct(id, author, channel, line))
            }
            Ok(ReadResult::Interrupted | ReadResult::Eof) | Err(_) => AwaitOutcome::Cancelled,
        }
    }
}
