use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ConvertToSignedDuration { scalar: f64 },
    DivisionByZero { scalar: f64 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ConvertToSignedDuration { scalar } => write!(
                f,
                "failed to convert duration of {scalar} nominal seconds \
                 to `jiff::SignedDuration`",
            ),
            DivisionByZero { scalar } => write!(
                f,
                "cannot divide duration of {scalar} nominal seconds by zero",
            ),
        }
    }
}
