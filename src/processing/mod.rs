//! Address validation logic.
//!
//! This module contains the checks that make up a validation pass:
//! - [`subnet`] - Subnet expression to prefix length resolution
//! - [`classify`] - Public / private / reserved address classification
//! - [`relationship`] - Same-subnet and network/broadcast edge cases
//! - [`validate`] - Full pass over a configuration

mod classify;
mod relationship;
mod subnet;
mod validate;

// Re-export public functions
pub use classify::{classify, is_public, is_public_text, AddressRange};
pub use relationship::{
    broadcast_address, edge_case_check, edge_case_for, network_address, same_subnet,
    same_subnet_addr, EdgeCase, IPV4_POINT_TO_POINT, IPV6_POINT_TO_POINT,
};
pub use subnet::{is_valid_subnet, resolve_for_version, resolve_subnet, resolve_subnet_text};
pub use validate::{validate, ValidationReport};
