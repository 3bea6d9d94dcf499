pub mod error;
pub mod repl;
pub mod scanner;

// Re-export the core types for convenience
pub use error::LexError;
pub use scanner::{Scanner, Span, Token, TokenKind};
