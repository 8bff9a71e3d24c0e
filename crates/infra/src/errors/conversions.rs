//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use plantview_domain::{ApiError, PlantViewError};
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PlantViewError);

impl From<InfraError> for PlantViewError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PlantViewError> for InfraError {
    fn from(value: PlantViewError) -> Self {
        Self(value)
    }
}

impl From<InfraError> for ApiError {
    fn from(value: InfraError) -> Self {
        value.0.into()
    }
}

trait IntoPlantViewError {
    fn into_plantview(self) -> PlantViewError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → PlantViewError */
/* -------------------------------------------------------------------------- */

impl IntoPlantViewError for KeyringError {
    fn into_plantview(self) -> PlantViewError {
        use KeyringError::{
            Ambiguous, BadEncoding, Invalid, NoEntry, NoStorageAccess, PlatformFailure, TooLong,
        };

        let description = self.to_string();

        match self {
            NoEntry => PlantViewError::Credentials("keychain entry not found".into()),
            BadEncoding(_) => {
                PlantViewError::Credentials("credential in keychain is not valid UTF-8".into())
            }
            TooLong(name, limit) => PlantViewError::Credentials(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => PlantViewError::Credentials(format!(
                "keychain attribute '{attr}' is invalid: {reason}"
            )),
            Ambiguous(entries) => PlantViewError::Credentials(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            PlatformFailure(err) => {
                PlantViewError::Credentials(format!("keychain platform error: {err}"))
            }
            NoStorageAccess(err) => {
                PlantViewError::Credentials(format!("unable to access secure storage: {err}"))
            }
            _ => PlantViewError::Credentials(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        Self(value.into_plantview())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PlantViewError */
/* -------------------------------------------------------------------------- */

impl IntoPlantViewError for HttpError {
    fn into_plantview(self) -> PlantViewError {
        if self.is_timeout() {
            return PlantViewError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return PlantViewError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return PlantViewError::Config(format!("invalid HTTP request: {self}"));
        }

        PlantViewError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_plantview())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → PlantViewError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        Self(PlantViewError::Config(format!("Invalid JSON format: {value}")))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        Self(PlantViewError::Config(format!("Invalid TOML format: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
