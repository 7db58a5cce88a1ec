//! Outlet records and the upstream API they come from.

pub mod client;
pub mod lookup;
pub mod types;

pub use client::OutletClient;
pub use lookup::{find_by_id, search_by_name};
pub use types::{Coordinates, FetchError, Outlet, OutletsEnvelope};
