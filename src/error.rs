// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum ServiceCreateError {
    #[error("Required environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("Invalid key=value pair in {field}: '{token}'")]
    InvalidPair { field: &'static str, token: String },

    #[error("Invalid ports definition: {0}")]
    InvalidPorts(String),

    #[error("Invalid API version '{0}'")]
    InvalidApiVersion(String),

    #[error("Failed to load cluster configuration: {0}")]
    Kubeconfig(String),

    #[error("Failed to create service: {0}")]
    Api(#[from] kube::Error),
}

impl ServiceCreateError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            ServiceCreateError::Api(_) | ServiceCreateError::Kubeconfig(_) => {
                exit_codes::API_FAILURE
            }
            _ => exit_codes::INVALID_INPUT,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceCreateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use kube::error::ErrorResponse;

    #[test]
    fn test_api_error_exits_with_one() {
        let err = ServiceCreateError::from(kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "services \"my-svc\" already exists".to_string(),
            reason: "AlreadyExists".to_string(),
            code: 409,
        }));

        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_connection_errors_exit_with_one() {
        let err = ServiceCreateError::Kubeconfig("failed to load certificate authority".to_string());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_validation_errors_exit_with_two() {
        let errors = [
            ServiceCreateError::MissingVariable("RD_CONFIG_NAME"),
            ServiceCreateError::InvalidPair {
                field: "selectors",
                token: "appweb".to_string(),
            },
            ServiceCreateError::InvalidPorts("missing field `port`".to_string()),
            ServiceCreateError::InvalidApiVersion(String::new()),
        ];

        for err in errors {
            assert_eq!(err.exit_code(), 2, "{}", err);
        }
    }
}
