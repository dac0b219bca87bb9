pub mod cache;
pub mod client;
pub mod error;
mod retry;
pub mod source;

pub use cache::ScheduleCache;
pub use client::FbrefClient;
pub use error::FbrefError;
pub use source::FbrefSource;
