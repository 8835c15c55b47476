//! Messenger Platform operations

pub mod service;

pub use service::MessengerService;
