//! The terminal collaborator behind every prompt.
//!
//! Prompt primitives never touch stdin or stdout directly; they talk to a
//! [`Term`] implementation. [`Console`] is the production one (stdout for
//! labels, stdin for lines, raw-mode key reads, masked password reads).
//! [`Script`] replays canned responses and records what was printed, which
//! is how the prompt loop is tested without a human at the keyboard.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

/// The capabilities a prompt needs from a terminal.
pub trait Term {
    /// Prints `text` followed by a newline.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Prints `label` without a newline and flushes, leaving the cursor on
    /// the prompt line.
    fn prompt(&mut self, label: &str) -> io::Result<()>;

    /// Reads one line, blocking. Returns `None` on end-of-input. The
    /// trailing line terminator is stripped; nothing else is trimmed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Reads a single key press with echo disabled. Non-character keys map
    /// to `'\0'` except Enter (`'\n'`) and Tab (`'\t'`).
    fn read_key(&mut self) -> io::Result<char>;

    /// Reads one line with echo suppressed, showing `label` first.
    fn read_secret(&mut self, label: &str) -> io::Result<String>;
}

/// The process-wide console.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Console {
        Console
    }
}

impl Term for Console {
    fn show(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")
    }

    fn prompt(&mut self, label: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{label}")?;
        out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn read_key(&mut self) -> io::Result<char> {
        terminal::enable_raw_mode()?;
        let key = next_key_press();
        terminal::disable_raw_mode()?;
        key
    }

    fn read_secret(&mut self, label: &str) -> io::Result<String> {
        rpassword::prompt_password_stdout(label)
    }
}

fn next_key_press() -> io::Result<char> {
    loop {
        if let Event::Key(ev) = event::read()? {
            if ev.kind == KeyEventKind::Press {
                return Ok(match ev.code {
                    KeyCode::Char(c) => c,
                    KeyCode::Enter => '\n',
                    KeyCode::Tab => '\t',
                    _ => '\0',
                });
            }
        }
    }
}

/// A scripted terminal for tests and non-interactive callers.
///
/// Lines, keys, and secrets are consumed front to back. An exhausted line
/// queue reads as end-of-input; an exhausted key or secret queue is an
/// `UnexpectedEof` i/o error. Everything printed lands in `output`.
#[derive(Debug, Default)]
pub struct Script {
    lines: VecDeque<String>,
    keys: VecDeque<char>,
    secrets: VecDeque<String>,
    pub output: Vec<String>,
}

impl Script {
    pub fn new() -> Script {
        Script::default()
    }

    pub fn with_lines(lines: &[&str]) -> Script {
        let mut script = Script::new();
        for line in lines {
            script.push_line(line);
        }
        script
    }

    pub fn push_line(&mut self, line: &str) {
        self.lines.push_back(line.to_string());
    }

    pub fn push_key(&mut self, key: char) {
        self.keys.push_back(key);
    }

    pub fn push_secret(&mut self, secret: &str) {
        self.secrets.push_back(secret.to_string());
    }
}

impl Term for Script {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<()> {
        self.output.push(label.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn read_key(&mut self) -> io::Result<char> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out of keys"))
    }

    fn read_secret(&mut self, label: &str) -> io::Result<String> {
        self.output.push(label.to_string());
        self.secrets.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out of secrets")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_lines_read_in_order_then_eof() {
        let mut script = Script::with_lines(&["first", "second"]);
        assert_eq!(script.read_line().unwrap(), Some("first".to_string()));
        assert_eq!(script.read_line().unwrap(), Some("second".to_string()));
        assert_eq!(script.read_line().unwrap(), None);
    }

    #[test]
    fn test_script_records_prompts_and_serves_keys() {
        let mut script = Script::new();
        script.push_key('q');
        script.prompt("pick: ").unwrap();
        assert_eq!(script.read_key().unwrap(), 'q');
        assert!(script.read_key().is_err());
        assert_eq!(script.output, vec!["pick: "]);
    }
}
