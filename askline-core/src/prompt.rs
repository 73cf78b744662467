//! The prompt loop controller.
//!
//! Every primitive here follows one contract: show a label, read a line
//! from the [`Term`] collaborator, validate it, and either return the
//! typed answer, return the caller's default on empty input, or ask
//! again. Invalid input is never an error; bounded-attempt variants
//! report `false` when they give up instead.
//!
//! ## Example
//! ```rust,no_run
//! use askline_core::{Prompter, SemanticType};
//!
//! let mut prompter = Prompter::stdio();
//! let age = prompter
//!     .value("age", &[SemanticType::Integer], None)
//!     .expect("terminal available");
//! println!("you said {age}");
//! ```

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::coerce::{self, SemanticType, Value};
use crate::error::PromptError;
use crate::terminal::{Console, Term};

const NUMERIC: [SemanticType; 2] = [SemanticType::Integer, SemanticType::Float];

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").expect("email pattern is a valid literal")
    })
}

/// An ordered key-to-label mapping shown by the selection prompts.
///
/// Keys are stringified up front and must be unique; a duplicate is a
/// call-time error, never a silent overwrite.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<(String, String)>,
}

impl Menu {
    /// Builds a menu from `(key, label)` pairs, stringifying both sides.
    ///
    /// # Example
    /// ```rust
    /// use askline_core::Menu;
    ///
    /// let menu = Menu::from_pairs(&[(1, "Start"), (2, "Stop")]).unwrap();
    /// assert_eq!(menu.get("2"), Some("Stop"));
    /// ```
    pub fn from_pairs<K: ToString, L: ToString>(pairs: &[(K, L)]) -> Result<Menu, PromptError> {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(pairs.len());
        for (key, label) in pairs {
            let key = key.to_string();
            if entries.iter().any(|(existing, _)| *existing == key) {
                return Err(PromptError::DuplicateMenuKey(key));
            }
            entries.push((key, label.to_string()));
        }
        Ok(Menu { entries })
    }

    /// The label stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }
}

/// Drives read-validate-retry cycles against a [`Term`] collaborator.
///
/// Holds no state between calls besides the terminal itself; each method
/// is a self-contained prompt.
pub struct Prompter<T: Term> {
    term: T,
}

impl Prompter<Console> {
    /// A prompter on the process's stdin/stdout.
    pub fn stdio() -> Prompter<Console> {
        Prompter::new(Console::new())
    }
}

impl<T: Term> Prompter<T> {
    pub fn new(term: T) -> Prompter<T> {
        Prompter { term }
    }

    /// Releases the terminal collaborator.
    pub fn into_inner(self) -> T {
        self.term
    }

    fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        self.term.prompt(&format!("{label}: "))?;
        self.term.read_line()?.ok_or(PromptError::Eof)
    }

    /// Asks until the user answers `y` or `n` (case-insensitive). Empty
    /// input returns `default` when one is given.
    pub fn yes_no(&mut self, label: &str, default: Option<char>) -> Result<char, PromptError> {
        loop {
            self.term.prompt(&format!("{label} [y/n]: "))?;
            let raw = self.term.read_line()?.ok_or(PromptError::Eof)?;
            let answer = raw.trim().to_ascii_lowercase();
            if answer.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            } else if answer == "y" || answer == "n" {
                return Ok(if answer == "y" { 'y' } else { 'n' });
            }
            debug!(input = %raw, "expected y or n, retrying");
        }
    }

    /// Asks until the input coerces under `allowed` (see
    /// [`coerce::coerce`] for how the set's order is used).
    ///
    /// Empty input returns `default` without touching the coercion engine.
    /// An empty `allowed` set is rejected before any read.
    pub fn value(
        &mut self,
        label: &str,
        allowed: &[SemanticType],
        default: Option<Value>,
    ) -> Result<Value, PromptError> {
        if allowed.is_empty() {
            return Err(PromptError::EmptyTypeSet);
        }
        let mut default = default;
        loop {
            let raw = self.ask(label)?;
            if raw.trim().is_empty() {
                if let Some(d) = default.take() {
                    return Ok(d);
                }
            } else if let Some(value) = coerce::coerce(&raw, allowed) {
                return Ok(value);
            }
            debug!(input = %raw, "no admissible type matched, retrying");
        }
    }

    /// Delimiter-separated variant of [`Prompter::value`]. The whole line
    /// is rejected if any fragment fails to coerce.
    pub fn values(
        &mut self,
        label: &str,
        delimiter: char,
        allowed: &[SemanticType],
        default: Option<Vec<Value>>,
    ) -> Result<Vec<Value>, PromptError> {
        if allowed.is_empty() {
            return Err(PromptError::EmptyTypeSet);
        }
        let mut default = default;
        loop {
            let raw = self.ask(label)?;
            if raw.trim().is_empty() {
                if let Some(d) = default.take() {
                    return Ok(d);
                }
            } else if let Some(batch) = coerce::coerce_all(&raw, delimiter, allowed) {
                return Ok(batch);
            }
            debug!(input = %raw, "batch rejected, retrying");
        }
    }

    /// Asks until the input equals `target`, compared as strings without
    /// trimming. With `max_attempts` set, gives up after that many wrong
    /// answers and reports `false`; a match on the final attempt still
    /// counts as success.
    pub fn match_value(
        &mut self,
        label: &str,
        target: &str,
        max_attempts: Option<u32>,
    ) -> Result<bool, PromptError> {
        let mut attempts = 0;
        loop {
            let raw = self.ask(label)?;
            if raw == target {
                return Ok(true);
            }
            attempts += 1;
            if max_attempts.is_some_and(|limit| attempts >= limit) {
                return Ok(false);
            }
            debug!(attempts, "target not matched, retrying");
        }
    }

    /// Like [`Prompter::match_value`] but against a set of targets: the
    /// delimiter-split input must equal `targets` ignoring order.
    pub fn match_values(
        &mut self,
        label: &str,
        targets: &[&str],
        delimiter: char,
        max_attempts: Option<u32>,
    ) -> Result<bool, PromptError> {
        let mut want: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
        want.sort();
        let mut attempts = 0;
        loop {
            let raw = self.ask(label)?;
            let mut got = coerce::split_fragments(&raw, delimiter);
            got.sort();
            if got == want {
                return Ok(true);
            }
            attempts += 1;
            if max_attempts.is_some_and(|limit| attempts >= limit) {
                return Ok(false);
            }
            debug!(attempts, "targets not matched, retrying");
        }
    }

    /// Asks until the input is one of the explicit boolean literals `0`,
    /// `1`, `false`, `true` (case-insensitive). Arbitrary-string
    /// truthiness is deliberately not a thing here.
    pub fn boolean(&mut self, label: &str, default: Option<bool>) -> Result<bool, PromptError> {
        loop {
            let raw = self.ask(label)?;
            let answer = raw.trim().to_ascii_lowercase();
            if answer.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            } else {
                match answer.as_str() {
                    "1" | "true" => return Ok(true),
                    "0" | "false" => return Ok(false),
                    _ => {}
                }
            }
            debug!(input = %raw, "expected a boolean literal, retrying");
        }
    }

    /// Asks until the input is numeric. Digit-only input comes back as
    /// [`Value::Int`], dotted literals as [`Value::Float`].
    pub fn number(&mut self, label: &str, default: Option<Value>) -> Result<Value, PromptError> {
        let mut default = default;
        loop {
            let raw = self.ask(label)?;
            if raw.trim().is_empty() {
                if let Some(d) = default.take() {
                    return Ok(d);
                }
            } else if let Some(value) = coerce::coerce(&raw, &NUMERIC) {
                return Ok(value);
            }
            debug!(input = %raw, "not a number, retrying");
        }
    }

    /// Asks until the input is a digit-only integer.
    pub fn integer(&mut self, label: &str, default: Option<i64>) -> Result<i64, PromptError> {
        loop {
            let raw = self.ask(label)?;
            let input = raw.trim();
            if input.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            } else if let Some(Value::Int(n)) = SemanticType::Integer.coerce(input) {
                return Ok(n);
            }
            debug!(input = %raw, "not an integer, retrying");
        }
    }

    /// Asks until the input is a dotted float literal.
    pub fn float(&mut self, label: &str, default: Option<f64>) -> Result<f64, PromptError> {
        loop {
            let raw = self.ask(label)?;
            let input = raw.trim();
            if input.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            } else if let Some(Value::Float(x)) = SemanticType::Float.coerce(input) {
                return Ok(x);
            }
            debug!(input = %raw, "not a float, retrying");
        }
    }

    /// Asks until the input is exactly one character, untrimmed.
    pub fn character(&mut self, label: &str, default: Option<char>) -> Result<char, PromptError> {
        loop {
            let raw = self.ask(label)?;
            if raw.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            } else {
                let mut chars = raw.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    return Ok(c);
                }
            }
            debug!(input = %raw, "expected exactly one character, retrying");
        }
    }

    /// Asks until the trimmed input is non-empty.
    pub fn string(&mut self, label: &str, default: Option<&str>) -> Result<String, PromptError> {
        loop {
            let raw = self.ask(label)?;
            let input = raw.trim();
            if input.is_empty() {
                if let Some(d) = default {
                    return Ok(d.to_string());
                }
            } else {
                return Ok(input.to_string());
            }
            debug!("empty input, retrying");
        }
    }

    /// Asks until every character of the trimmed input is alphabetic.
    pub fn alphabetic(
        &mut self,
        label: &str,
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        loop {
            let raw = self.ask(label)?;
            let input = raw.trim();
            if input.is_empty() {
                if let Some(d) = default {
                    return Ok(d.to_string());
                }
            } else if input.chars().all(char::is_alphabetic) {
                return Ok(input.to_string());
            }
            debug!(input = %raw, "expected alphabetic input, retrying");
        }
    }

    /// Asks until every character of the trimmed input is alphanumeric.
    pub fn alphanumeric(
        &mut self,
        label: &str,
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        loop {
            let raw = self.ask(label)?;
            let input = raw.trim();
            if input.is_empty() {
                if let Some(d) = default {
                    return Ok(d.to_string());
                }
            } else if input.chars().all(char::is_alphanumeric) {
                return Ok(input.to_string());
            }
            debug!(input = %raw, "expected alphanumeric input, retrying");
        }
    }

    /// Asks until a non-empty line arrives. Unlike [`Prompter::string`],
    /// the line is returned untrimmed.
    pub fn line(&mut self, label: &str, default: Option<&str>) -> Result<String, PromptError> {
        loop {
            let raw = self.ask(label)?;
            if raw.is_empty() {
                if let Some(d) = default {
                    return Ok(d.to_string());
                }
            } else {
                return Ok(raw);
            }
            debug!("empty line, retrying");
        }
    }

    /// Reads lines until the input stream ends and returns them in order.
    /// End-of-input terminates this primitive normally.
    pub fn lines(&mut self, label: &str) -> Result<Vec<String>, PromptError> {
        self.term.show(&format!("{label}: "))?;
        let mut collected = Vec::new();
        while let Some(line) = self.term.read_line()? {
            collected.push(line);
        }
        Ok(collected)
    }

    fn show_menu(&mut self, menu: &Menu, header: Option<&str>) -> Result<(), PromptError> {
        if let Some(h) = header {
            self.term.show(h)?;
        }
        for (key, label) in menu.iter() {
            self.term.show(&format!("\t[{key}]: {label}"))?;
        }
        self.term.show("")?;
        Ok(())
    }

    /// Displays the menu and asks until the input equals one of its keys.
    ///
    /// Returns the `(key, label)` pair. Empty input returns the default
    /// key when one is given; a default key that is not in the menu comes
    /// back as `(default, None)`.
    pub fn selection(
        &mut self,
        menu: &Menu,
        header: Option<&str>,
        label: &str,
        default: Option<&str>,
    ) -> Result<(String, Option<String>), PromptError> {
        if menu.is_empty() {
            return Err(PromptError::EmptyMenu);
        }
        self.show_menu(menu, header)?;
        loop {
            self.term.prompt(&format!("{label}> "))?;
            let raw = self.term.read_line()?.ok_or(PromptError::Eof)?;
            let key = raw.trim();
            if key.is_empty() {
                if let Some(d) = default {
                    return Ok((d.to_string(), menu.get(d).map(String::from)));
                }
            } else if let Some(chosen) = menu.get(key) {
                return Ok((key.to_string(), Some(chosen.to_string())));
            }
            debug!(input = %raw, "selection not in menu, retrying");
        }
    }

    /// Strict multi-selection: the delimiter-split input is accepted only
    /// when every key is in the menu. Returns `(key, label)` pairs in the
    /// order entered.
    pub fn multi_selection(
        &mut self,
        menu: &Menu,
        header: Option<&str>,
        label: &str,
        delimiter: char,
        default: Option<&[&str]>,
    ) -> Result<Vec<(String, Option<String>)>, PromptError> {
        self.multi_select(menu, header, label, delimiter, default, true)
    }

    /// Lenient multi-selection: accepted as soon as at least one key is in
    /// the menu. Unknown keys are kept and mapped to `None`.
    pub fn multi_selection_lenient(
        &mut self,
        menu: &Menu,
        header: Option<&str>,
        label: &str,
        delimiter: char,
        default: Option<&[&str]>,
    ) -> Result<Vec<(String, Option<String>)>, PromptError> {
        self.multi_select(menu, header, label, delimiter, default, false)
    }

    fn multi_select(
        &mut self,
        menu: &Menu,
        header: Option<&str>,
        label: &str,
        delimiter: char,
        default: Option<&[&str]>,
        require_all: bool,
    ) -> Result<Vec<(String, Option<String>)>, PromptError> {
        if menu.is_empty() {
            return Err(PromptError::EmptyMenu);
        }
        self.show_menu(menu, header)?;
        loop {
            self.term.prompt(&format!("{label}> "))?;
            let raw = self.term.read_line()?.ok_or(PromptError::Eof)?;
            let keys = coerce::split_fragments(&raw, delimiter);
            if keys.is_empty() {
                if let Some(chosen) = default {
                    return Ok(chosen
                        .iter()
                        .map(|k| (k.to_string(), menu.get(k).map(String::from)))
                        .collect());
                }
            } else {
                let known = |k: &String| menu.get(k).is_some();
                let accepted = if require_all {
                    keys.iter().all(known)
                } else {
                    keys.iter().any(known)
                };
                if accepted {
                    return Ok(keys
                        .into_iter()
                        .map(|k| {
                            let label = menu.get(&k).map(String::from);
                            (k, label)
                        })
                        .collect());
                }
            }
            debug!(input = %raw, "selection keys not in menu, retrying");
        }
    }

    /// Asks until the input contains an email-shaped token and returns the
    /// matched substring, not necessarily the whole line.
    pub fn email(&mut self, label: &str, default: Option<&str>) -> Result<String, PromptError> {
        loop {
            let raw = self.ask(label)?;
            let input = raw.trim();
            if input.is_empty() {
                if let Some(d) = default {
                    return Ok(d.to_string());
                }
            } else if let Some(m) = email_re().find(input) {
                return Ok(m.as_str().to_string());
            }
            debug!(input = %raw, "no email-shaped token found, retrying");
        }
    }

    /// Asks with echo suppressed until a non-empty password arrives.
    pub fn password(&mut self, label: &str, default: Option<&str>) -> Result<String, PromptError> {
        loop {
            let pwd = self.term.read_secret(&format!("{label}: "))?;
            if !pwd.is_empty() {
                return Ok(pwd);
            }
            if let Some(d) = default {
                return Ok(d.to_string());
            }
            debug!("empty password, retrying");
        }
    }

    /// Compares echo-suppressed input against `target`, with the same
    /// attempt accounting as [`Prompter::match_value`].
    pub fn match_password(
        &mut self,
        label: &str,
        target: &str,
        max_attempts: Option<u32>,
    ) -> Result<bool, PromptError> {
        let mut attempts = 0;
        loop {
            let pwd = self.term.read_secret(&format!("{label}: "))?;
            if pwd == target {
                return Ok(true);
            }
            attempts += 1;
            if max_attempts.is_some_and(|limit| attempts >= limit) {
                return Ok(false);
            }
            debug!(attempts, "password not matched, retrying");
        }
    }

    /// Asks until the untrimmed input matches `pattern` and returns the
    /// matched substring. Compile the pattern with whatever flags you need
    /// (`(?i)` and friends) before calling.
    pub fn regex(
        &mut self,
        label: &str,
        pattern: &Regex,
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        loop {
            let raw = self.ask(label)?;
            if raw.is_empty() {
                if let Some(d) = default {
                    return Ok(d.to_string());
                }
            } else if let Some(m) = pattern.find(&raw) {
                return Ok(m.as_str().to_string());
            }
            debug!(input = %raw, "pattern not matched, retrying");
        }
    }

    /// Blocks until `key` is pressed.
    pub fn wait_for_key(&mut self, key: char) -> Result<(), PromptError> {
        self.term.show(&format!("press '{key}' to continue..."))?;
        while self.term.read_key()? != key {}
        Ok(())
    }

    /// Blocks until one of `keys` is pressed. An empty key list is
    /// rejected before any read.
    pub fn wait_for_some_key(&mut self, keys: &[char]) -> Result<(), PromptError> {
        if keys.is_empty() {
            return Err(PromptError::EmptyKeySet);
        }
        self.term.show(&format!("press one of {keys:?} to continue..."))?;
        while !keys.contains(&self.term.read_key()?) {}
        Ok(())
    }

    /// Blocks until any key is pressed.
    pub fn wait_for_any_key(&mut self) -> Result<(), PromptError> {
        self.term.show("press any key to continue...")?;
        self.term.read_key()?;
        Ok(())
    }

    /// Blocks until the user hits Enter.
    pub fn wait_for_enter(&mut self) -> Result<(), PromptError> {
        self.term.prompt("press ENTER to continue...")?;
        self.term.read_line()?.ok_or(PromptError::Eof)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Script;

    fn prompter(lines: &[&str]) -> Prompter<Script> {
        Prompter::new(Script::with_lines(lines))
    }

    #[test]
    fn test_value_retries_until_allowed_type_matches() {
        let mut p = prompter(&["cat", "4.2", "7"]);
        let v = p.value("age", &[SemanticType::Integer], None).unwrap();
        assert_eq!(v, Value::Int(7));
    }

    #[test]
    fn test_value_default_short_circuits_coercion() {
        let mut p = prompter(&[""]);
        let v = p
            .value("age", &[SemanticType::Integer], Some(Value::Int(0)))
            .unwrap();
        assert_eq!(v, Value::Int(0));
    }

    #[test]
    fn test_value_rejects_empty_type_set_before_reading() {
        let mut p = prompter(&["1"]);
        let res = p.value("x", &[], None);
        assert!(matches!(res, Err(PromptError::EmptyTypeSet)));
        // nothing was printed, so no read happened either
        assert!(p.into_inner().output.is_empty());
    }

    #[test]
    fn test_value_surfaces_eof() {
        let mut p = prompter(&[]);
        assert!(matches!(
            p.value("x", &[SemanticType::Str], None),
            Err(PromptError::Eof)
        ));
    }

    #[test]
    fn test_values_batch_is_atomic() {
        let mut p = prompter(&["3, 5, cat", "3, 5, 8"]);
        let batch = p.values("nums", ',', &[SemanticType::Integer], None).unwrap();
        assert_eq!(batch, vec![Value::Int(3), Value::Int(5), Value::Int(8)]);
    }

    #[test]
    fn test_values_default_on_empty_input() {
        let mut p = prompter(&[""]);
        let batch = p
            .values("nums", ',', &[SemanticType::Integer], Some(vec![]))
            .unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_match_value_exhausts_bounded_attempts() {
        let mut p = prompter(&["0000", "9999"]);
        assert!(!p.match_value("code", "1234", Some(2)).unwrap());
    }

    #[test]
    fn test_match_value_succeeds_on_final_attempt() {
        let mut p = prompter(&["0000", "1234"]);
        assert!(p.match_value("code", "1234", Some(2)).unwrap());
    }

    #[test]
    fn test_match_value_unbounded_retries_until_hit() {
        let mut p = prompter(&["a", "b", "c", "1234"]);
        assert!(p.match_value("code", "1234", None).unwrap());
    }

    #[test]
    fn test_match_values_ignores_order() {
        let mut p = prompter(&["b, a"]);
        assert!(p.match_values("names", &["a", "b"], ',', Some(1)).unwrap());

        let mut p = prompter(&["a, c"]);
        assert!(!p.match_values("names", &["a", "b"], ',', Some(1)).unwrap());
    }

    #[test]
    fn test_boolean_accepts_only_explicit_literals() {
        let mut p = prompter(&["yes", "on", "1"]);
        assert!(p.boolean("flag", None).unwrap());

        let mut p = prompter(&["FALSE"]);
        assert!(!p.boolean("flag", None).unwrap());

        let mut p = prompter(&["0"]);
        assert!(!p.boolean("flag", None).unwrap());
    }

    #[test]
    fn test_number_return_type_follows_literal_form() {
        let mut p = prompter(&["42"]);
        assert_eq!(p.number("n", None).unwrap(), Value::Int(42));

        let mut p = prompter(&["4.2"]);
        assert_eq!(p.number("n", None).unwrap(), Value::Float(4.2));
    }

    #[test]
    fn test_integer_and_float_reject_the_other_form() {
        let mut p = prompter(&["4.2", "42"]);
        assert_eq!(p.integer("n", None).unwrap(), 42);

        let mut p = prompter(&["42", "4.2"]);
        assert_eq!(p.float("x", None).unwrap(), 4.2);
    }

    #[test]
    fn test_character_rejects_empty_and_multi_char() {
        let mut p = prompter(&["ab", "", "c"]);
        assert_eq!(p.character("key", None).unwrap(), 'c');
    }

    #[test]
    fn test_yes_no_normalizes_case_and_takes_default() {
        let mut p = prompter(&["maybe", "Y"]);
        assert_eq!(p.yes_no("continue?", None).unwrap(), 'y');

        let mut p = prompter(&[""]);
        assert_eq!(p.yes_no("continue?", Some('n')).unwrap(), 'n');
    }

    #[test]
    fn test_string_trims_and_line_does_not() {
        let mut p = prompter(&["  padded  "]);
        assert_eq!(p.string("s", None).unwrap(), "padded");

        let mut p = prompter(&["  padded  "]);
        assert_eq!(p.line("s", None).unwrap(), "  padded  ");
    }

    #[test]
    fn test_alphabetic_and_alphanumeric_classes() {
        let mut p = prompter(&["abc123", "abc"]);
        assert_eq!(p.alphabetic("word", None).unwrap(), "abc");

        let mut p = prompter(&["a b", "ab2"]);
        assert_eq!(p.alphanumeric("word", None).unwrap(), "ab2");
    }

    #[test]
    fn test_lines_collects_until_stream_end() {
        let mut p = prompter(&["first", "second"]);
        assert_eq!(p.lines("notes").unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_selection_returns_key_label_pair_after_retry() {
        let menu = Menu::from_pairs(&[("1", "Start"), ("2", "Stop")]).unwrap();
        let mut p = prompter(&["3", "2"]);
        let (key, label) = p.selection(&menu, Some("menu"), "enter selection", None).unwrap();
        assert_eq!(key, "2");
        assert_eq!(label.as_deref(), Some("Stop"));
    }

    #[test]
    fn test_selection_default_may_name_a_missing_key() {
        let menu = Menu::from_pairs(&[("1", "Start")]).unwrap();
        let mut p = prompter(&[""]);
        let (key, label) = p.selection(&menu, None, "pick", Some("9")).unwrap();
        assert_eq!(key, "9");
        assert_eq!(label, None);
    }

    #[test]
    fn test_selection_displays_menu_before_reading() {
        let menu = Menu::from_pairs(&[("1", "Start")]).unwrap();
        let mut p = prompter(&["1"]);
        p.selection(&menu, Some("menu"), "pick", None).unwrap();
        let output = p.into_inner().output;
        assert_eq!(output[0], "menu");
        assert_eq!(output[1], "\t[1]: Start");
    }

    #[test]
    fn test_menu_rejects_duplicate_keys() {
        let res = Menu::from_pairs(&[(1, "a"), (1, "b")]);
        assert!(matches!(res, Err(PromptError::DuplicateMenuKey(k)) if k == "1"));
    }

    #[test]
    fn test_multi_selection_strict_requires_every_key() {
        let menu = Menu::from_pairs(&[("1", "Start"), ("2", "Stop"), ("3", "Pause")]).unwrap();
        let mut p = prompter(&["1, 9", "1, 3"]);
        let picked = p.multi_selection(&menu, None, "pick", ',', None).unwrap();
        assert_eq!(
            picked,
            vec![
                ("1".to_string(), Some("Start".to_string())),
                ("3".to_string(), Some("Pause".to_string())),
            ]
        );
    }

    #[test]
    fn test_multi_selection_lenient_marks_missing_keys() {
        let menu = Menu::from_pairs(&[("1", "Start"), ("2", "Stop")]).unwrap();
        let mut p = prompter(&["1, 9"]);
        let picked = p
            .multi_selection_lenient(&menu, None, "pick", ',', None)
            .unwrap();
        assert_eq!(
            picked,
            vec![
                ("1".to_string(), Some("Start".to_string())),
                ("9".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_multi_selection_default_maps_missing_to_none() {
        let menu = Menu::from_pairs(&[("1", "Start")]).unwrap();
        let mut p = prompter(&[""]);
        let picked = p
            .multi_selection(&menu, None, "pick", ',', Some(&["1", "9"]))
            .unwrap();
        assert_eq!(
            picked,
            vec![
                ("1".to_string(), Some("Start".to_string())),
                ("9".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_email_returns_matched_substring() {
        let mut p = prompter(&["not an address", "contact me at bob@example.com please"]);
        assert_eq!(p.email("email", None).unwrap(), "bob@example.com");
    }

    #[test]
    fn test_regex_returns_matched_substring() {
        let pattern = Regex::new(r"\d{4}").unwrap();
        let mut p = prompter(&["no digits", "pin 1234 ok"]);
        assert_eq!(p.regex("pin", &pattern, None).unwrap(), "1234");
    }

    #[test]
    fn test_password_retries_on_empty_without_default() {
        let mut script = Script::new();
        script.push_secret("");
        script.push_secret("hunter2");
        let mut p = Prompter::new(script);
        assert_eq!(p.password("pwd", None).unwrap(), "hunter2");
    }

    #[test]
    fn test_password_empty_takes_default() {
        let mut script = Script::new();
        script.push_secret("");
        let mut p = Prompter::new(script);
        assert_eq!(p.password("pwd", Some("fallback")).unwrap(), "fallback");
    }

    #[test]
    fn test_match_password_bounded_attempts() {
        let mut script = Script::new();
        script.push_secret("nope");
        script.push_secret("nope");
        let mut p = Prompter::new(script);
        assert!(!p.match_password("pwd", "secret", Some(2)).unwrap());

        let mut script = Script::new();
        script.push_secret("nope");
        script.push_secret("secret");
        let mut p = Prompter::new(script);
        assert!(p.match_password("pwd", "secret", Some(2)).unwrap());
    }

    #[test]
    fn test_wait_for_key_consumes_until_match() {
        let mut script = Script::new();
        script.push_key('x');
        script.push_key('q');
        let mut p = Prompter::new(script);
        p.wait_for_key('q').unwrap();
    }

    #[test]
    fn test_wait_for_some_key_rejects_empty_key_set() {
        let mut p = Prompter::new(Script::new());
        assert!(matches!(
            p.wait_for_some_key(&[]),
            Err(PromptError::EmptyKeySet)
        ));
    }

    #[test]
    fn test_wait_for_some_key_accepts_any_listed_key() {
        let mut script = Script::new();
        script.push_key('z');
        script.push_key('b');
        let mut p = Prompter::new(script);
        p.wait_for_some_key(&['a', 'b']).unwrap();
    }

    #[test]
    fn test_wait_for_enter_reads_one_line() {
        let mut p = prompter(&[""]);
        p.wait_for_enter().unwrap();
    }
}
