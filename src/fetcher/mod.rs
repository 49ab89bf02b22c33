pub mod backoff;
pub mod charset;
pub mod client;
pub mod errors;
pub mod throttle;
pub mod types;

pub use backoff::backoff_delay;
pub use client::HttpSource;
pub use errors::FetchError;
pub use throttle::{Throttle, ThrottlePermit};
pub use types::{Charset, PageResponse};
