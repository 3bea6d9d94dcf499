use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Diagnostic for invalid lexemes. The scanner itself never returns errors;
/// callers derive these from `Illegal` tokens when they want to report them.
#[derive(Error, Debug, Diagnostic)]
pub enum LexError {
    #[error("invalid lexeme '{lexeme}'")]
    #[diagnostic(code(tablang::lex))]
    Illegal {
        lexeme: String,
        #[label("not a recognized token")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl LexError {
    pub fn illegal(lexeme: impl Into<String>, offset: usize, len: usize) -> Self {
        Self::Illegal {
            lexeme: lexeme.into(),
            span: SourceSpan::new(offset.into(), len),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        match self {
            Self::Illegal { lexeme, span, .. } => Self::Illegal {
                lexeme,
                span,
                src: miette::NamedSource::new(name.into(), source.into()),
            },
        }
    }
}
