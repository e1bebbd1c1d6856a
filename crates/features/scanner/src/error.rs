use std::borrow::Cow;

#[guidex_derive::guidex_error]
pub enum ScanError {
    /// The SDK include directory does not exist.
    #[error("SDK not found{}: {message}", format_context(.context))]
    SdkNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The activatable class registry cannot be read on this platform.
    #[error("Registry unavailable{}: {message}", format_context(.context))]
    RegistryUnavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Directory walk error{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },

    #[error("Internal scanner error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
