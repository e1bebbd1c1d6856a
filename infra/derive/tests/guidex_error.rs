use guidex_derive::guidex_error;
use std::borrow::Cow;

#[guidex_error]
pub enum HeaderError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed declaration{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn missing_file() -> Result<Vec<u8>, HeaderError> {
    std::fs::read("/definitely/not/here/combaseapi.h").context("Reading combaseapi.h")
}

#[test]
fn guidex_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/guidex_error_pass.rs");
}

#[test]
fn source_results_gain_context() {
    let err = missing_file().expect_err("file must not exist");
    assert!(matches!(err, HeaderError::Io { context: Some(_), .. }));
    assert!(err.to_string().starts_with("I/O error (Reading combaseapi.h): "));
}

#[test]
fn question_mark_converts_sources() {
    fn open() -> Result<(), HeaderError> {
        std::fs::File::open("/definitely/not/here/unknwn.h")?;
        Ok(())
    }

    let err = open().expect_err("file must not exist");
    assert!(matches!(err, HeaderError::Io { context: None, .. }));
}

#[test]
fn context_is_attached_to_own_variants() {
    let result: Result<(), HeaderError> = Err(HeaderError::Malformed {
        message: "DEFINE_GUID expects 12 arguments".into(),
        context: None,
    });

    let err = result.context("ksmedia.h:120").expect_err("error must survive");
    assert_eq!(err.to_string(), "Malformed declaration (ksmedia.h:120): DEFINE_GUID expects 12 arguments");
}

#[test]
fn strings_convert_into_internal() {
    let from_static: HeaderError = "unexpected state".into();
    let from_owned: HeaderError = String::from("unexpected state").into();

    assert_eq!(from_static.to_string(), "Internal error: unexpected state");
    assert_eq!(from_owned.to_string(), from_static.to_string());
}
