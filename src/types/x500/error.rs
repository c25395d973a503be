use super::field::Field;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed token: `{0}`")]
    MalformedToken(String),
    #[error("Missing: {0}")]
    MissingField(Field),
    #[error("Wrong length: {field} (min: {min}, max: {max})")]
    LengthViolation {
        field: Field,
        min: usize,
        max: usize,
    },
    #[error("First character is not uppercase: {0}")]
    CaseViolation(Field),
    #[error("Has leading or trailing whitespace: {0}")]
    WhitespaceViolation(Field),
    #[error("Contains invalid characters: {0}")]
    InvalidCharacter(Field),
    #[error("Contains null character: {0}")]
    NullCharacter(Field),
}
