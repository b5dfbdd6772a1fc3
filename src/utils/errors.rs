use std::error;
use std::fmt::{self, Display, Formatter};
use std::result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    StateLength(usize),
    IndexOutOfRange(usize),
    NotEnoughOutputs(usize),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::StateLength(len) => {
                write!(formatter, "state must be 624 words long, got {}", len)
            }
            Error::IndexOutOfRange(index) => {
                write!(formatter, "state index {} is past the end of the state", index)
            }
            Error::NotEnoughOutputs(count) => write!(
                formatter,
                "need 624 consecutive outputs to rebuild the state, got {}",
                count
            ),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_bad_value() {
        assert_eq!(
            Error::StateLength(3).to_string(),
            "state must be 624 words long, got 3"
        );
        assert!(Error::IndexOutOfRange(700).to_string().contains("700"));
        assert!(Error::NotEnoughOutputs(12).to_string().contains("12"));
    }
}
