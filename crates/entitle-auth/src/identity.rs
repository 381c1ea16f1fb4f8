//! Decoding of the inbound `x-rh-identity` assertion.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::IdentityError;

/// Name of the header carrying the identity assertion.
pub const IDENTITY_HEADER: &str = "x-rh-identity";

/// The only subject type the gateway resolves.
pub const USER_SUBJECT_TYPE: &str = "User";

/// A decoded identity assertion.
///
/// The assertion is trusted as-is; signature checks happen upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityAssertion {
    /// Subject type, `"User"` for anything [`decode`] returns.
    pub subject_type: String,
    /// Non-empty username of the caller.
    pub username: String,
}

impl IdentityAssertion {
    /// Build a user assertion.
    pub fn user(username: impl Into<String>) -> Self {
        Self {
            subject_type: USER_SUBJECT_TYPE.to_string(),
            username: username.into(),
        }
    }

    /// Encode the assertion as an `x-rh-identity` header value.
    pub fn to_header_value(&self) -> String {
        let envelope = Envelope {
            identity: Identity {
                subject_type: self.subject_type.clone(),
                user: UserIdentity {
                    username: self.username.clone(),
                },
            },
        };
        // Serializing plain strings cannot fail.
        STANDARD.encode(serde_json::to_vec(&envelope).unwrap_or_default())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    identity: Identity,
}

#[derive(Debug, Serialize, Deserialize)]
struct Identity {
    #[serde(rename = "type")]
    subject_type: String,
    user: UserIdentity,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserIdentity {
    username: String,
}

/// Decode and validate an `x-rh-identity` header value.
///
/// Pure function of its input. Unknown fields in the payload are ignored.
pub fn decode(header_value: &str) -> Result<IdentityAssertion, IdentityError> {
    if header_value.is_empty() {
        return Err(IdentityError::MissingHeader);
    }

    let raw = STANDARD.decode(header_value)?;
    let envelope: Envelope = serde_json::from_slice(&raw)?;
    let Identity { subject_type, user } = envelope.identity;

    if subject_type != USER_SUBJECT_TYPE || user.username.is_empty() {
        return Err(IdentityError::InvalidSubject {
            subject_type,
            username: user.username,
        });
    }

    Ok(IdentityAssertion {
        subject_type,
        username: user.username,
    })
}
