//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use orion_domain::OrionError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub OrionError);

impl From<InfraError> for OrionError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<OrionError> for InfraError {
    fn from(value: OrionError) -> Self {
        InfraError(value)
    }
}

trait IntoOrionError {
    fn into_orion(self) -> OrionError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → OrionError */
/* -------------------------------------------------------------------------- */

impl IntoOrionError for KeyringError {
    fn into_orion(self) -> OrionError {
        use KeyringError::{BadEncoding, Invalid, NoStorageAccess, PlatformFailure, TooLong};

        match self {
            // Locked or denied keychains are the common case on desktops
            NoStorageAccess(err) => OrionError::Storage(format!(
                "keychain refused access to the saved ORION session: {err}"
            )),
            PlatformFailure(err) => OrionError::Storage(format!(
                "keychain failed while reading or writing the ORION session: {err}"
            )),
            // Never echo the stored bytes, they are a token
            BadEncoding(_) => OrionError::Storage(
                "saved ORION session in the keychain is not valid text".into(),
            ),
            // Only the configured service name can trip these
            TooLong(attr, limit) => OrionError::Config(format!(
                "keychain {attr} is longer than the platform allows ({limit})"
            )),
            Invalid(attr, reason) => {
                OrionError::Config(format!("keychain {attr} was rejected: {reason}"))
            }
            other => OrionError::Storage(format!("keychain error: {other}")),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_orion())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → OrionError */
/* -------------------------------------------------------------------------- */

impl IntoOrionError for HttpError {
    fn into_orion(self) -> OrionError {
        // Statuses and bodies are handled by the API client, so only
        // transport and request-building failures arrive here.
        if self.is_builder() {
            return OrionError::Config(format!("could not build ORION request: {self}"));
        }

        if self.is_timeout() {
            return OrionError::Network("ORION server did not respond in time".into());
        }

        if self.is_connect() {
            return OrionError::Network("could not reach the ORION server".into());
        }

        OrionError::Network(format!("request to the ORION server failed: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_orion())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error / serde_json::Error → OrionError */
/* -------------------------------------------------------------------------- */

impl IntoOrionError for std::io::Error {
    fn into_orion(self) -> OrionError {
        match self.kind() {
            std::io::ErrorKind::NotFound => OrionError::NotFound(self.to_string()),
            _ => OrionError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_orion())
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(OrionError::Storage(format!("invalid stored JSON: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
