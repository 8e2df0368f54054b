pub mod latency;
pub mod seed;

mod repository;

pub use latency::{FixedLatency, Latency, NoLatency, RandomLatency};
pub use repository::*;
pub use seed::default_roster;
