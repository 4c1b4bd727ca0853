// Chunk: docs/chunks/console_frontend - Line-oriented frontend
//!
//! A line-oriented frontend over stdin/stdout.
//!
//! Lines starting with `:` are commands; anything else is appended to the
//! active document as a new line. `::text` appends a line that itself starts
//! with `:`. The tab strip is printed after every command and whenever a tab
//! label changes.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::app::{Flow, Notepad};
use crate::dialogs::{Dialogs, TerminalDialogs};
use crate::shortcuts::{parse_chord, resolve_action, Action};
use crate::tab_bar::{render_tab_strip, tabs_from_collection};

#[cfg(target_os = "macos")]
use crate::dialogs::NativeDialogs;

pub const HELP: &str = "\
commands:
  :new              new empty tab
  :open [PATH]      open a file in a new tab
  :save             save the active tab
  :saveas [PATH]    save the active tab under a new name
  :close [N]        close tab N (default: the active tab)
  :tab N            switch to tab N
  :next, :prev      cycle through tabs
  :set TEXT         replace the active text (\\n for newlines)
  :back             delete the last character
  :key CHORD        press a shortcut, e.g. ctrl+shift+s
  :tabs             show the tab strip
  :show             print the active text
  :help             this help
  :quit             quit, asking about unsaved changes
any other line is appended to the active tab; start it with :: to append a line beginning with :";

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    Tabs,
    Show,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command :{0} (try :help)")]
    Unknown(String),
    #[error(":{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("not a tab number: {0}")]
    BadTabNumber(String),
    #[error("not a key chord: {0}")]
    BadChord(String),
    #[error("{0} is not bound to anything")]
    Unbound(String),
}

/// Parses a tab number as shown in the strip (1-based) into an index.
fn tab_index(arg: &str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadTabNumber(arg.to_string())),
    }
}

fn optional_path(arg: &str) -> Option<PathBuf> {
    (!arg.is_empty()).then(|| PathBuf::from(arg))
}

/// Parses one input line.
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Command::Action(Action::AppendLine(line.to_string())));
    };
    if command.starts_with(':') {
        return Ok(Command::Action(Action::AppendLine(command.to_string())));
    }

    // Only the separator after the name is dropped; `:set` keeps the rest verbatim.
    let (name, raw_arg) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
    let arg = raw_arg.trim();

    let action = match name {
        "new" => Action::NewTab,
        "open" => Action::Open(optional_path(arg)),
        "save" => Action::Save,
        "saveas" => Action::SaveAs(optional_path(arg)),
        "close" if arg.is_empty() => Action::CloseActiveTab,
        "close" => Action::CloseTab(tab_index(arg)?),
        "tab" if arg.is_empty() => return Err(CommandError::MissingArgument("tab")),
        "tab" => Action::SwitchTab(tab_index(arg)?),
        "next" => Action::NextTab,
        "prev" => Action::PrevTab,
        "set" => Action::ReplaceText(raw_arg.replace("\\n", "\n")),
        "back" => Action::DeleteBackward,
        "key" if arg.is_empty() => return Err(CommandError::MissingArgument("key")),
        "key" => {
            let event = parse_chord(arg).ok_or_else(|| CommandError::BadChord(arg.to_string()))?;
            resolve_action(&event).ok_or_else(|| CommandError::Unbound(arg.to_string()))?
        }
        "quit" | "q" => Action::Quit,
        "tabs" => return Ok(Command::Tabs),
        "show" => return Ok(Command::Show),
        "help" | "h" => return Ok(Command::Help),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Action(action))
}

pub struct Console<R, W> {
    notepad: Notepad,
    terminal: TerminalDialogs<R, W>,
    #[cfg(target_os = "macos")]
    native: Option<NativeDialogs>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(notepad: Notepad, terminal: TerminalDialogs<R, W>) -> Self {
        Self {
            notepad,
            terminal,
            #[cfg(target_os = "macos")]
            native: None,
        }
    }

    pub fn notepad(&self) -> &Notepad {
        &self.notepad
    }

    pub fn output(&mut self) -> &mut W {
        self.terminal.output()
    }

    /// Routes dialogs to native panels instead of the terminal, when the
    /// platform has them and we are on the main thread.
    pub fn use_native_dialogs(&mut self, enabled: bool) {
        #[cfg(target_os = "macos")]
        {
            self.native = if enabled { NativeDialogs::new() } else { None };
            if enabled && self.native.is_none() {
                debug!("native dialogs need the main thread; using the terminal");
            }
        }
        #[cfg(not(target_os = "macos"))]
        if enabled {
            debug!("no native dialogs on this platform; using the terminal");
        }
    }

    fn with_dialogs<T>(&mut self, f: impl FnOnce(&mut Notepad, &mut dyn Dialogs) -> T) -> T {
        #[cfg(target_os = "macos")]
        if let Some(native) = self.native.as_mut() {
            return f(&mut self.notepad, native);
        }
        f(&mut self.notepad, &mut self.terminal)
    }

    pub fn open_files(&mut self, paths: &[PathBuf]) -> usize {
        self.with_dialogs(|notepad, dialogs| notepad.open_files(paths, dialogs))
    }

    fn print_tabs(&mut self) -> io::Result<()> {
        let strip = render_tab_strip(&tabs_from_collection(self.notepad.collection()));
        writeln!(self.terminal.output(), "{strip}")
    }

    /// Handles one input line.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let is_command = line.starts_with(':') && !line.starts_with("::");
        let mut flow = Flow::Continue;

        match parse_line(line) {
            Ok(Command::Action(action)) => {
                flow = self.with_dialogs(|notepad, dialogs| notepad.dispatch(action, dialogs));
            }
            Ok(Command::Tabs) => {}
            Ok(Command::Show) => {
                let content = self
                    .notepad
                    .collection()
                    .active_document()
                    .map(|doc| doc.content())
                    .unwrap_or_default();
                writeln!(self.terminal.output(), "{content}")?;
            }
            Ok(Command::Help) => writeln!(self.terminal.output(), "{HELP}")?,
            Err(e) => writeln!(self.terminal.output(), "{e}")?,
        }

        let events = self.notepad.take_events();
        if flow == Flow::Continue && (is_command || !events.is_empty()) {
            self.print_tabs()?;
        }
        Ok(flow)
    }

    /// Reads and handles lines until `:quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_tabs()?;
        while let Some(line) = self.terminal.read_line()? {
            if self.handle_line(&line)? == Flow::Quit {
                return Ok(());
            }
        }

        let unsaved = tabs_from_collection(self.notepad.collection())
            .iter()
            .filter(|tab| tab.is_dirty)
            .count();
        if unsaved > 0 {
            writeln!(self.terminal.output(), "warning: {unsaved} document(s) left with unsaved changes")?;
        }
        Ok(())
    }
}
