use std::fmt::{Debug, Formatter};

use crate::error::Error;

const BEARER_PREFIX: &str = "Bearer ";

/// Shared-secret check in front of the admin write path.
///
/// The secret is a plaintext password compared against an
/// `Authorization: Bearer <token>` header. It is not a signing key.
#[derive(Clone)]
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        AdminGate {
            secret: secret.into(),
        }
    }

    /// Accepts exactly `Bearer <secret>`. An empty secret accepts nothing.
    pub fn verify(&self, authorization: Option<&str>) -> bool {
        let Some(token) = authorization.and_then(|h| h.strip_prefix(BEARER_PREFIX)) else {
            return false;
        };
        !self.secret.is_empty() && constant_time_eq(token.as_bytes(), self.secret.as_bytes())
    }

    pub fn require(&self, authorization: Option<&str>) -> Result<(), Error> {
        if self.verify(authorization) {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }
}

impl Debug for AdminGate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
