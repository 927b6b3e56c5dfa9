// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Assembly of the Service object from the flat settings

use crate::config::ServiceSettings;
use crate::constants::SERVICE_KIND;
use crate::error::{Result, ServiceCreateError};
use crate::types::pairs::parse_pairs;
use crate::types::ports::{parse_ports, ServicePortSpec};
use k8s_openapi::api::core::v1::{Service, ServiceSpec};
use kube::api::{ApiResource, DynamicObject, TypeMeta};
use kube::core::gvk::GroupVersion;
use serde_json::json;
use std::collections::BTreeMap;

/// A fully parsed create request
#[derive(Clone, Debug)]
pub struct ServiceRequest {
    pub api_version: GroupVersion,
    pub name: String,
    pub namespace: String,
    pub service_type: String,
    pub selectors: BTreeMap<String, String>,
    pub ports: Vec<ServicePortSpec>,
    pub labels: Option<BTreeMap<String, String>>,
    pub annotations: Option<BTreeMap<String, String>>,
    pub external_traffic_policy: Option<String>,
    pub session_affinity: Option<String>,
    pub external_name: Option<String>,
    pub load_balancer_ip: Option<String>,
}

impl ServiceRequest {
    /// Parse every setting. Fails before anything is sent to the cluster.
    pub fn from_settings(settings: &ServiceSettings) -> Result<Self> {
        Ok(ServiceRequest {
            api_version: parse_api_version(&settings.api_version)?,
            name: settings.name.clone(),
            namespace: settings.namespace.clone(),
            service_type: settings.service_type.clone(),
            selectors: parse_pairs("selectors", &settings.selectors)?,
            ports: parse_ports(&settings.ports)?,
            labels: settings
                .labels
                .as_deref()
                .map(|l| parse_pairs("labels", l))
                .transpose()?,
            annotations: settings
                .annotations
                .as_deref()
                .map(|a| parse_pairs("annotations", a))
                .transpose()?,
            external_traffic_policy: settings.external_traffic_policy.clone(),
            session_affinity: settings.session_affinity.clone(),
            external_name: settings.external_name.clone(),
            load_balancer_ip: settings.load_balancer_ip.clone(),
        })
    }

    /// The core v1 Services endpoint. The requested API version only goes on the object.
    pub fn api_resource(&self) -> ApiResource {
        ApiResource::erase::<Service>(&())
    }

    /// Unset optional fields stay unset so the API server applies its defaults
    pub fn service_spec(&self) -> ServiceSpec {
        ServiceSpec {
            type_: Some(self.service_type.clone()),
            selector: Some(self.selectors.clone()),
            ports: Some(self.ports.iter().cloned().map(Into::into).collect()),
            external_traffic_policy: self.external_traffic_policy.clone(),
            session_affinity: self.session_affinity.clone(),
            external_name: self.external_name.clone(),
            load_balancer_ip: self.load_balancer_ip.clone(),
            ..Default::default()
        }
    }

    /// The object submitted to the API server
    pub fn to_object(&self) -> DynamicObject {
        let mut service = DynamicObject::new(&self.name, &self.api_resource())
            .within(&self.namespace)
            .data(json!({ "spec": self.service_spec() }));
        service.types = Some(TypeMeta {
            api_version: self.api_version.api_version(),
            kind: SERVICE_KIND.to_string(),
        });
        service.metadata.labels = self.labels.clone();
        service.metadata.annotations = self.annotations.clone();
        service
    }
}

fn parse_api_version(api_version: &str) -> Result<GroupVersion> {
    let invalid = || ServiceCreateError::InvalidApiVersion(api_version.to_string());
    let trimmed = api_version.trim();
    let gv: GroupVersion = trimmed.parse().map_err(|_| invalid())?;
    if gv.version.is_empty()
        || gv.version.contains('/')
        || (gv.group.is_empty() && trimmed.contains('/'))
    {
        return Err(invalid());
    }
    Ok(gv)
}
