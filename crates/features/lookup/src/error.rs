use std::borrow::Cow;

/// Errors raised while loading a lookup source. Lookups themselves never fail.
#[guidex_derive::guidex_error]
pub enum LookupError {
    /// The INI file is missing or cannot be parsed.
    #[error("INI database error{}: {source}", format_context(.context))]
    Ini { source: ::ini::Error, context: Option<Cow<'static, str>> },

    /// The INI file has no `[All Interfaces]` section.
    #[error("Missing section{}: {message}", format_context(.context))]
    MissingSection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal lookup error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
