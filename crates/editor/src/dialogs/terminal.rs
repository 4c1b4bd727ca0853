// Chunk: docs/chunks/file_dialogs - Open/save pickers, close prompt, error messages
//! Dialogs answered on a line-oriented terminal.
//!
//! Each dialog writes its question to the output and reads one line of
//! input. An empty answer to a picker cancels it; end of input cancels
//! anything.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use notepad_input::{Key, KeyEvent};
use tracing::warn;

use super::Dialogs;
use crate::confirm_dialog::{ConfirmButton, ConfirmDialog, ConfirmOutcome};

pub struct TerminalDialogs<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDialogs<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line without its line ending. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes `text` as a line. Failures are logged, never surfaced.
    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}").and_then(|_| self.output.flush()) {
            warn!("terminal dialog failed: {e}");
        }
    }

    /// Writes `question` and reads the answer. I/O failures count as no answer.
    fn ask(&mut self, question: &str) -> Option<String> {
        let answer = write!(self.output, "{question}")
            .and_then(|_| self.output.flush())
            .and_then(|_| self.read_line());
        match answer {
            Ok(line) => line,
            Err(e) => {
                warn!("terminal dialog failed: {e}");
                None
            }
        }
    }

    fn ask_path(&mut self, question: &str) -> Option<PathBuf> {
        self.ask(question)
            .map(|answer| answer.trim().to_string())
            .filter(|answer| !answer.is_empty())
            .map(PathBuf::from)
    }
}

/// Key a typed answer stands for: an empty line is Enter, otherwise its first char.
fn answer_key(answer: &str) -> KeyEvent {
    match answer.trim().chars().next() {
        None => KeyEvent::plain(Key::Return),
        Some(ch) => KeyEvent::char(ch),
    }
}

impl<R: BufRead, W: Write> Dialogs for TerminalDialogs<R, W> {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.ask_path("Open file: ")
    }

    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        self.ask_path(&format!("Save as ({suggested_name}): "))
    }

    fn confirm(&mut self, mut dialog: ConfirmDialog) -> ConfirmButton {
        self.say(&format!("{}\n{}", dialog.heading, dialog.prompt));
        loop {
            let Some(answer) = self.ask(&format!("{} ", dialog.button_row())) else {
                return ConfirmButton::Cancel;
            };
            if let ConfirmOutcome::Chosen(button) = dialog.handle_key(&answer_key(&answer)) {
                return button;
            }
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.say(&format!("error: {title}: {message}"));
    }
}
