//! Parser for tagged text.
//!
//! This module contains the tag grammar, the lexer and the compiling scanner.

mod lexer;
mod scan;
mod syntax;

pub use lexer::{Lexer, Token};
pub use scan::{compile, compile_with};
pub use syntax::{TagMarkup, tag_markup};
