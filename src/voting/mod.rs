pub mod commands;
pub mod service;

pub use service::VotingService;
