//! Networking modules for the remote accounts service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `accounts` wraps the service's REST endpoints and owns failure
//! classification; no other module talks to the network directly.

pub mod accounts;
