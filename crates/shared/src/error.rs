#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    User(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!("password hash: {value}"))
    }
}

impl From<sqlx_migrator::Error> for Error {
    fn from(value: sqlx_migrator::Error) -> Self {
        Self::Unknown(value.into())
    }
}

/// Returns early with a message that is safe to show to the caller.
#[macro_export]
macro_rules! user {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::User(format!($msg)))
    };
    ($msg:expr $(,)?) => {
        return Err($crate::Error::User($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::User(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(name: &str) -> Result<String> {
        if name.is_empty() {
            crate::user!("Name is required");
        }

        if name.len() > 3 {
            crate::user!("Name {name} is too long");
        }

        Ok(name.to_owned())
    }

    #[test]
    fn test_user_macro_keeps_message() {
        let err = reject("").unwrap_err();

        assert!(matches!(err, Error::User(_)));
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_user_macro_formats_arguments() {
        let err = reject("john").unwrap_err();

        assert_eq!(err.to_string(), "Name john is too long");
        assert_eq!(reject("jo").ok().as_deref(), Some("jo"));
    }
}
