mod core;
mod gateway;
mod observability;
mod upstream;

pub use core::Config;
pub use gateway::GatewayConfig;
pub use observability::ObservabilityConfig;
pub use upstream::UpstreamConfig;
