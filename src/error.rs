use std::fmt::{self, Display, Formatter};

/// Error type for the fallible `BigInt` operations. Arithmetic failures here
/// are all value-domain problems (a bad divisor, a lossy cast); none of them
/// are transient, there is nothing to retry against.
#[derive(Debug)]
pub struct BigIntError {
    kind: BigIntErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntErrorKind {
    /// The divisor of a division or modulo operation was zero.
    DivideByZero,
    /// A narrowing conversion would have dropped limbs or the sign.
    LossyConversion,
}

impl BigIntError {
    pub fn new(kind: BigIntErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> BigIntErrorKind {
        self.kind
    }
}

impl Display for BigIntErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BigIntErrorKind::DivideByZero => "DivideByZero",
            BigIntErrorKind::LossyConversion => "LossyConversion",
        })
    }
}

impl Display for BigIntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "ErrorKind: {}, Message: {}",
            self.kind, self.message
        ))
    }
}

impl std::error::Error for BigIntError {}

pub type BigIntResult<T> = Result<T, BigIntError>;
pub type BigIntTestResult = Result<(), BigIntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = BigIntError::new(BigIntErrorKind::DivideByZero, "divisor was zero");
        assert_eq!(err.kind(), BigIntErrorKind::DivideByZero);
        assert_eq!(
            err.to_string(),
            "ErrorKind: DivideByZero, Message: divisor was zero"
        );
    }
}
