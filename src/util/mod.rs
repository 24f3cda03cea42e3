//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic:
//! `storage` owns localStorage access, `guard` owns the unauthenticated
//! redirect rule every protected route applies.

pub mod guard;
pub mod storage;
