pub mod aggregate;
pub mod classify;
pub mod fields;
pub mod metrics;
pub mod temporal;
