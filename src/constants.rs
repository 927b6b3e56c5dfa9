// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variable names, all prefixed with `RD_CONFIG_`
pub mod env {
    pub const CONFIG_FILE: &str = "RD_CONFIG_CONFIG_FILE";
    pub const URL: &str = "RD_CONFIG_URL";
    pub const VERIFY_SSL: &str = "RD_CONFIG_VERIFY_SSL";
    pub const SSL_CA_CERT: &str = "RD_CONFIG_SSL_CA_CERT";
    pub const TOKEN: &str = "RD_CONFIG_TOKEN";
    pub const DEBUG: &str = "RD_CONFIG_DEBUG";

    pub const API_VERSION: &str = "RD_CONFIG_API_VERSION";
    pub const NAME: &str = "RD_CONFIG_NAME";
    pub const NAMESPACE: &str = "RD_CONFIG_NAMESPACE";
    pub const TYPE: &str = "RD_CONFIG_TYPE";
    pub const LABELS: &str = "RD_CONFIG_LABELS";
    pub const SELECTORS: &str = "RD_CONFIG_SELECTORS";
    pub const PORTS: &str = "RD_CONFIG_PORTS";
    pub const ANNOTATIONS: &str = "RD_CONFIG_ANNOTATIONS";
    pub const EXTERNAL_TRAFFIC_POLICY: &str = "RD_CONFIG_EXTERNAL_TRAFFIC_POLICY";
    pub const SESSION_AFFINITY: &str = "RD_CONFIG_SESSION_AFFINITY";
    pub const EXTERNAL_NAME: &str = "RD_CONFIG_EXTERNAL_NAME";
    pub const LOAD_BALANCER_IP: &str = "RD_CONFIG_LOAD_BALANCER_IP";
}

/// Tracing filter directives used when `RUST_LOG` is not set
pub mod logging {
    pub const DEFAULT_DIRECTIVES: &str = "info";
    pub const DEBUG_DIRECTIVES: &str = "info,service_create=debug,kubernetes_service_create=debug";
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    /// The API server rejected the request, could not be reached, or the
    /// connection settings could not be loaded
    pub const API_FAILURE: u8 = 1;
    /// Configuration or input could not be parsed
    pub const INVALID_INPUT: u8 = 2;
}

/// Names used for the in-memory kubeconfig built from an explicit URL
pub mod kubeconfig {
    pub const CLUSTER: &str = "rundeck-cluster";
    pub const USER: &str = "rundeck-user";
    pub const CONTEXT: &str = "rundeck";
}

pub const SERVICE_KIND: &str = "Service";

/// Protocol assumed when naming a port that does not declare one
pub const DEFAULT_PROTOCOL: &str = "TCP";
