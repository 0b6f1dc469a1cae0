pub mod intake;
pub mod metrics;
pub mod recommendation;
pub mod risk;
