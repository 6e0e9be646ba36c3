use thiserror::Error;

pub type BcResult<T> = Result<T, BcError>;

#[derive(Error, Debug)]
pub enum BcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
