//! Connector hosting
//!
//! This crate holds the factory seam connectors plug into and the registry
//! the host uses to look factories up by type, render their schemas, and
//! activate connectors from administrator-supplied values.

mod registry;

pub use registry::{ConnectorFactory, ConnectorRegistry};
