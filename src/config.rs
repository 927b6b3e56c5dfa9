// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use secrecy::SecretString;
use std::env;
use std::path::PathBuf;

use crate::constants::{env as vars, logging};
use crate::error::{Result, ServiceCreateError};

/// Settings used to reach the API server
#[derive(Debug, Default)]
pub struct ConnectionConfig {
    /// Kubeconfig file; takes precedence over every other field
    pub config_file: Option<PathBuf>,
    pub url: Option<String>,
    pub verify_ssl: bool,
    pub ca_cert: Option<PathBuf>,
    pub token: Option<SecretString>,
}

/// Raw service settings, exactly as supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct ServiceSettings {
    pub api_version: String,
    pub name: String,
    pub namespace: String,
    pub service_type: String,
    pub selectors: String,
    pub ports: String,
    pub labels: Option<String>,
    pub annotations: Option<String>,
    pub external_traffic_policy: Option<String>,
    pub session_affinity: Option<String>,
    pub external_name: Option<String>,
    pub load_balancer_ip: Option<String>,
}

/// Tool configuration loaded from `RD_CONFIG_*` environment variables
#[derive(Debug)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub service: ServiceSettings,
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let required = |key: &'static str| optional(key).ok_or(ServiceCreateError::MissingVariable(key));
        let flag = |key: &str| optional(key).is_some_and(|v| v == "true");

        let connection = ConnectionConfig {
            config_file: optional(vars::CONFIG_FILE).map(PathBuf::from),
            url: optional(vars::URL),
            verify_ssl: flag(vars::VERIFY_SSL),
            ca_cert: optional(vars::SSL_CA_CERT).map(PathBuf::from),
            token: optional(vars::TOKEN).map(SecretString::from),
        };

        let service = ServiceSettings {
            api_version: required(vars::API_VERSION)?,
            name: required(vars::NAME)?,
            namespace: required(vars::NAMESPACE)?,
            service_type: required(vars::TYPE)?,
            selectors: required(vars::SELECTORS)?,
            ports: required(vars::PORTS)?,
            labels: optional(vars::LABELS),
            annotations: optional(vars::ANNOTATIONS),
            external_traffic_policy: optional(vars::EXTERNAL_TRAFFIC_POLICY),
            session_affinity: optional(vars::SESSION_AFFINITY),
            external_name: optional(vars::EXTERNAL_NAME),
            load_balancer_ip: optional(vars::LOAD_BALANCER_IP),
        };

        Ok(Config {
            connection,
            service,
            debug: flag(vars::DEBUG),
        })
    }
}

/// Tracing filter directives; debug only raises this tool's own targets
pub fn log_directives(debug: bool) -> &'static str {
    if debug {
        logging::DEBUG_DIRECTIVES
    } else {
        logging::DEFAULT_DIRECTIVES
    }
}
