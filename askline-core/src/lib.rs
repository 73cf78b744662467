//! # askline
//!
//! A small library for asking a human questions at the console and coercing
//! the typed answer into a validated value, retrying until the input is
//! valid or a default / attempt limit applies.
//!
//! ## Features
//! - **Typed input coercion** - declare the semantic types a prompt accepts
//!   (`Integer`, `Float`, `Boolean`, `Character`, `Str`) and get back a
//!   typed [`Value`]; the set's order decides ambiguous inputs.
//! - **Retry-until-valid loops** - invalid input re-prompts, empty input
//!   can fall back to a per-call default, and bounded-attempt variants
//!   report `false` instead of erroring.
//! - **Menus** - single and multi selection over an ordered key/label
//!   [`Menu`], strict or lenient key matching.
//! - **Masked and raw reads** - passwords with echo suppressed, key-press
//!   waits, regex and email extraction.
//! - **Swappable terminal** - every prompt runs against the [`Term`] trait;
//!   [`Console`] talks to the real terminal, [`Script`] replays canned
//!   answers for tests.
//!
//! ## Example
//! ```rust,no_run
//! use askline_core::{Prompter, SemanticType};
//!
//! let mut prompter = Prompter::stdio();
//!
//! let name = prompter.string("name", None).unwrap();
//! let age = prompter
//!     .value("age", &[SemanticType::Integer], None)
//!     .unwrap();
//! println!("hello {name}, you are {age}");
//! ```

pub mod coerce;
pub mod error;
pub mod prompt;
pub mod terminal;

pub use coerce::{SemanticType, Value};
pub use error::PromptError;
pub use prompt::{Menu, Prompter};
pub use terminal::{Console, Script, Term};
