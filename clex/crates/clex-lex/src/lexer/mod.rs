//! Lexer module.
//!
//! The implementation is split by token family:
//! - `core` - Lexer struct, dispatch and the lenient/strict entry points
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `string` - String literal lexing
//! - `operator` - Multi-character operators and the fallback rule

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
