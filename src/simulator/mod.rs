//! Demo-mode response simulator.
//!
//! Maps a request target onto one of the canned fixture payloads and hands
//! it back as a JSON response after a randomised delay.

mod latency;
mod resource;
mod response;
mod simulator;

pub use latency::LatencyRange;
pub use resource::ResourceKind;
pub use response::MockResponse;
pub use simulator::{mock_fetch, DemoSimulator, RequestOptions, NEW_CHAT_PREFIX};
