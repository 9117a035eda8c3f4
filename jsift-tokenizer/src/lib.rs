//! # jsift-tokenizer
//!
//! Extracts "meaningful tokens" from loosely JSON-like text: quoted string
//! literals and bare numeric literals, in source order.
//!
//! This is deliberately not a JSON parser. There is no structural
//! validation and no understanding of nesting, arrays, objects, booleans,
//! null, or escape sequences inside quotes. The scanner is a total
//! function: any input produces a token list, and malformed input degrades
//! (an unterminated quote block is dropped, nested quotes are not
//! understood) instead of failing.
//!
//! Layout:
//!   src/token.rs     The Token type and its listing/serialization forms
//!   src/scanner.rs   The character-level mode machine (the core)
//!   src/loader.rs    SourceLoader, the file/string loading wrapper
//!   src/testing.rs   Token factories shared by unit and integration tests

pub mod loader;
pub mod scanner;
pub mod testing;
pub mod token;

pub use loader::{LoaderError, SourceLoader};
pub use scanner::{tokenize, Scanner};
pub use token::Token;
