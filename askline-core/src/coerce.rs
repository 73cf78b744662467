//! Type inference and coercion for raw terminal input.
//!
//! Everything the user types arrives as one string. This module decides
//! which semantic shape that string has and converts it into a typed
//! [`Value`]. Callers declare the shapes they accept as an ordered slice
//! of [`SemanticType`]; the first type in the slice whose recognizer
//! accepts the input wins, so `&[Integer, Float, Str]` reads `"3"` as an
//! integer while `&[Str]` keeps it as text.
//!
//! Coercion is a pure function of its arguments: no state is kept between
//! calls and a recognized input always converts without error.
//!
//! ## Example
//! ```rust
//! use askline_core::coerce::{self, SemanticType, Value};
//!
//! let v = coerce::coerce(" 42 ", &[SemanticType::Integer, SemanticType::Str]);
//! assert_eq!(v, Some(Value::Int(42)));
//! ```

use std::fmt::Display;

/// The semantic shapes a raw input line can be read as.
///
/// Each variant carries a recognizer predicate ([`SemanticType::recognizes`])
/// and a conversion ([`SemanticType::coerce`]); dispatch is on the tag, never
/// on runtime type objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// Any non-empty text.
    Str,
    /// A string of decimal digits that fits in an `i64`.
    Integer,
    /// A numeric literal containing a decimal point.
    Float,
    /// The literals `true` / `false`, case-insensitive.
    Boolean,
    /// Exactly one character.
    Character,
}

impl SemanticType {
    /// Returns `true` when `input` can be read as this type.
    pub fn recognizes(&self, input: &str) -> bool {
        match self {
            SemanticType::Str => !input.is_empty(),
            SemanticType::Integer => {
                !input.is_empty()
                    && input.bytes().all(|b| b.is_ascii_digit())
                    && input.parse::<i64>().is_ok()
            }
            SemanticType::Float => input.contains('.') && input.parse::<f64>().is_ok(),
            SemanticType::Boolean => {
                input.eq_ignore_ascii_case("true") || input.eq_ignore_ascii_case("false")
            }
            SemanticType::Character => {
                let mut chars = input.chars();
                chars.next().is_some() && chars.next().is_none()
            }
        }
    }

    /// Converts `input` into a [`Value`], or `None` when the recognizer
    /// rejects it. A recognized input always converts.
    pub fn coerce(&self, input: &str) -> Option<Value> {
        if !self.recognizes(input) {
            return None;
        }
        let value = match self {
            SemanticType::Str => Value::Str(input.to_string()),
            SemanticType::Integer => Value::Int(input.parse().ok()?),
            SemanticType::Float => Value::Float(input.parse().ok()?),
            SemanticType::Boolean => Value::Bool(input.eq_ignore_ascii_case("true")),
            SemanticType::Character => Value::Char(input.chars().next()?),
        };
        Some(value)
    }
}

impl Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Boolean => write!(f, "boolean"),
            Self::Character => write!(f, "character"),
        }
    }
}

/// A coerced input value, tagged with the shape it was read as.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Value {
    /// The [`SemanticType`] this value was coerced under.
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            Value::Str(_) => SemanticType::Str,
            Value::Int(_) => SemanticType::Integer,
            Value::Float(_) => SemanticType::Float,
            Value::Bool(_) => SemanticType::Boolean,
            Value::Char(_) => SemanticType::Character,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Infers the canonical type of an input after trimming: boolean literals
/// first, then digit-only integers, then dotted float literals, then any
/// non-empty string. Empty input has no type.
pub fn infer(raw: &str) -> Option<SemanticType> {
    let input = raw.trim();
    [
        SemanticType::Boolean,
        SemanticType::Integer,
        SemanticType::Float,
        SemanticType::Str,
    ]
    .into_iter()
    .find(|t| t.recognizes(input))
}

/// Coerces `raw` (trimmed) against an ordered set of admissible types.
///
/// The first type in `allowed` whose recognizer accepts wins, so the
/// caller's ordering decides how ambiguous inputs are read. Listing
/// [`SemanticType::Str`] opts into the plain-text fallback; without it a
/// non-matching input is rejected outright.
pub fn coerce(raw: &str, allowed: &[SemanticType]) -> Option<Value> {
    let input = raw.trim();
    allowed.iter().find_map(|t| t.coerce(input))
}

/// Splits `raw` on `delimiter`, trims each fragment, and drops empty ones.
pub fn split_fragments(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect()
}

/// Batch coercion: splits `raw` on `delimiter` and coerces every fragment
/// against the same `allowed` set. All-or-nothing: one bad fragment rejects
/// the whole input. Input with no non-empty fragments is also rejected.
pub fn coerce_all(raw: &str, delimiter: char, allowed: &[SemanticType]) -> Option<Vec<Value>> {
    let fragments = split_fragments(raw, delimiter);
    if fragments.is_empty() {
        return None;
    }
    fragments
        .iter()
        .map(|fragment| coerce(fragment, allowed))
        .collect()
}
