// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The create call against the API server

use crate::error::Result;
use crate::types::ServiceRequest;
use kube::{
    api::{DynamicObject, PostParams},
    Api, Client,
};
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Result of a successful create
#[derive(Clone, Debug, PartialEq)]
pub struct CreatedService {
    /// The `status` the API server reported for the new object
    pub status: Option<Value>,
}

impl CreatedService {
    /// Line printed on standard output
    pub fn status_line(&self) -> String {
        let status = self
            .status
            .as_ref()
            .map_or_else(|| "None".to_string(), Value::to_string);
        format!("Deployment created. status='{}'", status)
    }
}

/// Submit a single create request for the Service. No retry is attempted.
#[instrument(skip(client, request), fields(service = %format!("{}/{}", request.namespace, request.name)))]
pub async fn create_service(client: &Client, request: &ServiceRequest) -> Result<CreatedService> {
    let resource = request.api_resource();
    let services: Api<DynamicObject> =
        Api::namespaced_with(client.clone(), &request.namespace, &resource);
    let service = request.to_object();

    debug!("New service: {:?}", service);
    info!(
        "Creating service {}/{} ({})",
        request.namespace,
        request.name,
        request.api_version.api_version()
    );

    let created = services.create(&PostParams::default(), &service).await?;

    info!("Service {}/{} created", request.namespace, request.name);

    Ok(CreatedService {
        status: created.data.get("status").filter(|s| !s.is_null()).cloned(),
    })
}
