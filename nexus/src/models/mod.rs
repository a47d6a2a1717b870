//! Wire entities exchanged with the monitoring backend.
//!
//! Every type here mirrors the backend's JSON (snake_case field names) and is
//! consumed by the service layer without further decoding.

pub mod building;
pub mod education;
pub mod energy;
pub mod macros;
pub mod optimization;

pub use building::*;
pub use education::*;
pub use energy::*;
pub use optimization::*;
