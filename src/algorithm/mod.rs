/// Layout generation entry points and run configuration
pub mod executor;
/// Termination policy and split strategies
pub mod policy;
mod subdivision;
