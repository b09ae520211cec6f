//! Thermal systems models.
//!
//! This module contains models for thermal systems such as heat recovery
//! devices on domestic hot water plumbing.

pub mod dwhr;
