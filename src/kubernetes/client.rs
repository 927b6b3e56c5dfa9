// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server connection resolution and client creation

use crate::config::ConnectionConfig;
use crate::constants::kubeconfig::{CLUSTER, CONTEXT, USER};
use crate::error::{Result, ServiceCreateError};
use kube::config::{
    AuthInfo, Cluster, Context, KubeConfigOptions, Kubeconfig, NamedAuthInfo, NamedCluster,
    NamedContext,
};
use kube::{Client, Config as KConfig};
use secrecy::SecretString;
use std::path::Path;
use tracing::{debug, instrument};

/// Where the client configuration comes from. Exactly one applies per run.
#[derive(Debug)]
pub enum ConnectionSource<'a> {
    /// An explicit kubeconfig file; every other connection setting is ignored
    ConfigFile(&'a Path),
    /// An API server URL with optional CA and bearer token
    Explicit {
        url: &'a str,
        verify_ssl: bool,
        ca_cert: Option<&'a Path>,
        token: Option<&'a SecretString>,
    },
    /// The default kubeconfig, or the in-cluster service account
    Default,
}

impl<'a> ConnectionSource<'a> {
    pub fn resolve(connection: &'a ConnectionConfig) -> Self {
        if let Some(path) = connection.config_file.as_deref() {
            ConnectionSource::ConfigFile(path)
        } else if let Some(url) = connection.url.as_deref() {
            ConnectionSource::Explicit {
                url,
                verify_ssl: connection.verify_ssl,
                ca_cert: connection.ca_cert.as_deref(),
                token: connection.token.as_ref(),
            }
        } else {
            ConnectionSource::Default
        }
    }

    /// Load the kube client configuration for this source
    pub async fn load(&self) -> Result<KConfig> {
        match self {
            ConnectionSource::ConfigFile(path) => {
                debug!("Getting settings from file {}", path.display());
                let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                    ServiceCreateError::Kubeconfig(format!(
                        "Failed to read {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                from_kubeconfig(kubeconfig).await
            }
            ConnectionSource::Explicit {
                url,
                verify_ssl,
                ca_cert,
                token,
            } => {
                debug!("Getting settings from plugin configuration for {}", url);
                from_kubeconfig(explicit_kubeconfig(url, *verify_ssl, *ca_cert, *token)).await
            }
            ConnectionSource::Default => {
                debug!("Getting settings from default config file");
                KConfig::infer().await.map_err(|e| {
                    ServiceCreateError::Kubeconfig(format!("Failed to infer config: {}", e))
                })
            }
        }
    }
}

/// Create a Kubernetes client for the configured API server
#[instrument(skip(connection))]
pub async fn connect(connection: &ConnectionConfig) -> Result<Client> {
    let client_config = ConnectionSource::resolve(connection).load().await?;
    debug!("Using API server {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| ServiceCreateError::Kubeconfig(format!("Failed to create client: {}", e)))
}

async fn from_kubeconfig(kubeconfig: Kubeconfig) -> Result<KConfig> {
    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| ServiceCreateError::Kubeconfig(format!("Failed to create config: {}", e)))
}

/// Build a single-context kubeconfig for an explicit API server URL
fn explicit_kubeconfig(
    url: &str,
    verify_ssl: bool,
    ca_cert: Option<&Path>,
    token: Option<&SecretString>,
) -> Kubeconfig {
    Kubeconfig {
        clusters: vec![NamedCluster {
            name: CLUSTER.to_string(),
            cluster: Some(Cluster {
                server: Some(url.to_string()),
                insecure_skip_tls_verify: Some(!verify_ssl),
                certificate_authority: ca_cert.map(|p| p.to_string_lossy().into_owned()),
                ..Default::default()
            }),
        }],
        auth_infos: vec![NamedAuthInfo {
            name: USER.to_string(),
            auth_info: Some(AuthInfo {
                token: token.cloned(),
                ..Default::default()
            }),
        }],
        contexts: vec![NamedContext {
            name: CONTEXT.to_string(),
            context: Some(Context {
                cluster: CLUSTER.to_string(),
                user: Some(USER.to_string()),
                ..Default::default()
            }),
        }],
        current_context: Some(CONTEXT.to_string()),
        ..Default::default()
    }
}
