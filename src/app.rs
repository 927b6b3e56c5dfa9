// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! A single run: parse the settings, create the Service, report the outcome.

use crate::config::Config;
use crate::constants::exit_codes;
use crate::error::Result;
use crate::kubernetes::{create_service, CreatedService};
use crate::types::ServiceRequest;
use kube::Client;
use tracing::{debug, error};

/// Parse the service settings and submit them. Parse failures return before any request is made.
pub async fn run(config: &Config, client: &Client) -> Result<CreatedService> {
    debug!("Creating service from data: {:?}", config.service);
    let request = ServiceRequest::from_settings(&config.service)?;

    create_service(client, &request).await
}

/// What the process prints on stdout and the code it exits with
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub stdout: Option<String>,
    pub exit_code: u8,
}

impl Report {
    /// Errors are logged to stderr and never produce a stdout line
    pub fn from_result(result: &Result<CreatedService>) -> Self {
        match result {
            Ok(created) => Report {
                stdout: Some(created.status_line()),
                exit_code: exit_codes::SUCCESS,
            },
            Err(e) => {
                error!("{}", e);
                Report {
                    stdout: None,
                    exit_code: e.exit_code(),
                }
            }
        }
    }
}
