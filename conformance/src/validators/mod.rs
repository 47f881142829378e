//! Validators for the mapped graph and its serialized artifacts.

pub mod events;
pub mod rdf;
