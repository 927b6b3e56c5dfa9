// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parsing of the flat settings into a Service object.

pub mod pairs;
pub mod ports;
pub mod service;

pub use pairs::parse_pairs;
pub use ports::{parse_ports, PortsInput, ServicePortSpec};
pub use service::ServiceRequest;
