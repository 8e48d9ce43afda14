pub mod aggregate;
pub mod metrics;
pub mod orders;
pub mod projection;
