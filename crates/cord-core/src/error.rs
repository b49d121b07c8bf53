use std::num::ParseFloatError;
use thiserror::Error;

/// Failures while binding the widget to its document. Nothing after setup
/// can fail.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("attribute `{name}` is not a number: {value:?}")]
    BadAttribute {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
