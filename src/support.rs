//! Supporting utilities used by models.
//!
//! These modules are public because callers build model inputs with them,
//! but their APIs are not stable.

pub mod constraint;
pub mod units;
