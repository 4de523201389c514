//! Domain types for the rail network.
//!
//! This module contains the core types that represent a validated
//! network description. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod line;
mod station;
mod stop;

pub use line::{Flow, InvalidLineId, LineId};
pub use station::{InvalidStationId, StationId};
pub use stop::{Stop, StopToken};
