mod service;

pub use service::{RosterService, ServiceError};
