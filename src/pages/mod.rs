//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form glue, guard effects,
//! navigation after auth outcomes) and keeps shared behavior in `state`,
//! `net`, and `util`.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;
