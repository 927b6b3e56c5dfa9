// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Port definitions, accepted either as a single mapping or as a list of mappings

use crate::constants::DEFAULT_PROTOCOL;
use crate::error::{Result, ServiceCreateError};
use k8s_openapi::api::core::v1::ServicePort;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use serde::Deserialize;
use serde_yaml::Value;

/// A port number as written by the caller, either `80` or `"80"`
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PortValue {
    Number(i32),
    Text(String),
}

impl PortValue {
    fn to_number(&self, field: &str) -> Result<i32> {
        match self {
            PortValue::Number(n) => Ok(*n),
            PortValue::Text(s) => s.trim().parse().map_err(|_| {
                ServiceCreateError::InvalidPorts(format!("{} must be a number, got '{}'", field, s))
            }),
        }
    }

    /// Numeric strings become integers, anything else names a container port
    fn to_int_or_string(&self) -> IntOrString {
        match self {
            PortValue::Number(n) => IntOrString::Int(*n),
            PortValue::Text(s) => match s.trim().parse() {
                Ok(n) => IntOrString::Int(n),
                Err(_) => IntOrString::String(s.clone()),
            },
        }
    }
}

/// One port entry before validation
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PortSpecInput {
    pub port: PortValue,
    pub name: Option<String>,
    pub protocol: Option<String>,
    #[serde(alias = "node_port")]
    pub node_port: Option<PortValue>,
    #[serde(alias = "target_port")]
    pub target_port: Option<PortValue>,
}

/// The two accepted shapes of the ports setting
#[derive(Clone, Debug)]
pub enum PortsInput {
    Single(PortSpecInput),
    Many(Vec<PortSpecInput>),
}

/// A validated port of the Service
#[derive(Clone, Debug, PartialEq)]
pub struct ServicePortSpec {
    pub port: i32,
    pub name: Option<String>,
    pub node_port: Option<i32>,
    pub protocol: Option<String>,
    pub target_port: Option<IntOrString>,
}

impl PortsInput {
    /// Parse YAML or JSON into one of the two shapes
    pub fn parse(data: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(data)
            .map_err(|e| ServiceCreateError::InvalidPorts(e.to_string()))?;

        match value {
            Value::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    serde_yaml::from_value(item).map_err(|e| {
                        ServiceCreateError::InvalidPorts(format!("entry {}: {}", i, e))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(PortsInput::Many),
            mapping @ Value::Mapping(_) => serde_yaml::from_value(mapping)
                .map(PortsInput::Single)
                .map_err(|e| ServiceCreateError::InvalidPorts(e.to_string())),
            _ => Err(ServiceCreateError::InvalidPorts(
                "expected a list of ports or a single port mapping".to_string(),
            )),
        }
    }

    /// Validate the entries. Only list entries get a default name.
    pub fn into_specs(self) -> Result<Vec<ServicePortSpec>> {
        match self {
            PortsInput::Single(input) => Ok(vec![input.into_spec(false)?]),
            PortsInput::Many(inputs) if inputs.is_empty() => Err(
                ServiceCreateError::InvalidPorts("at least one port is required".to_string()),
            ),
            PortsInput::Many(inputs) => inputs
                .into_iter()
                .map(|input| input.into_spec(true))
                .collect(),
        }
    }
}

impl PortSpecInput {
    fn into_spec(self, default_name: bool) -> Result<ServicePortSpec> {
        let port = self.port.to_number("port")?;
        let node_port = self
            .node_port
            .as_ref()
            .map(|p| p.to_number("nodePort"))
            .transpose()?;

        let name = match self.name {
            Some(name) => Some(name),
            None if default_name => Some(
                format!(
                    "{}{}",
                    self.protocol.as_deref().unwrap_or(DEFAULT_PROTOCOL),
                    port
                )
                .to_lowercase(),
            ),
            None => None,
        };

        Ok(ServicePortSpec {
            port,
            name,
            node_port,
            protocol: self.protocol,
            target_port: self.target_port.as_ref().map(PortValue::to_int_or_string),
        })
    }
}

impl From<ServicePortSpec> for ServicePort {
    fn from(spec: ServicePortSpec) -> Self {
        ServicePort {
            port: spec.port,
            name: spec.name,
            node_port: spec.node_port,
            protocol: spec.protocol,
            target_port: spec.target_port,
            ..Default::default()
        }
    }
}

/// Parse the ports setting into validated port specs
pub fn parse_ports(data: &str) -> Result<Vec<ServicePortSpec>> {
    PortsInput::parse(data)?.into_specs()
}
