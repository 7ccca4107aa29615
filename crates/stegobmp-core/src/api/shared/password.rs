use std::fmt::{self, Debug, Formatter};

/// The secret used to key the payload cipher, an unset password disables encryption.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Password {
    secret: Option<String>,
}

impl Password {
    pub fn get(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.secret.is_some()
    }
}

/// never prints the secret, only whether one is set
impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.secret {
            Some(_) => f.write_str("Password(<redacted>)"),
            None => f.write_str("Password(unset)"),
        }
    }
}

impl<S: Into<String>> From<Option<S>> for Password {
    fn from(secret: Option<S>) -> Self {
        Self {
            secret: secret.map(Into::into),
        }
    }
}

impl From<String> for Password {
    fn from(secret: String) -> Self {
        Some(secret).into()
    }
}

impl From<&str> for Password {
    fn from(secret: &str) -> Self {
        Some(secret).into()
    }
}
