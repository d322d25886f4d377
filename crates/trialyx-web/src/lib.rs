//! trialyx-web — HTTP surface of the Trialyx registry proxy.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
