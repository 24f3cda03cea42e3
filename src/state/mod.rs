//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session lifecycle is the one piece of state this shell shares across
//! routes; it lives behind a context-provided store rather than a global so
//! tests and future screens can construct their own.

pub mod session;
