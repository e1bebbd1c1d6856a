use std::borrow::Cow;

#[guidex_derive::guidex_error]
pub enum ExportError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Formatting error{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Internal export error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
