//! Outlet Locator: neighbour detection and canned questions over the
//! outlet list served by an external `/outlets` API.

pub mod hours;
pub mod logging;
pub mod map;
pub mod outlet;
pub mod proximity;
pub mod query;
pub mod server;
pub mod settings;

pub use outlet::{Coordinates, FetchError, Outlet, OutletClient};
pub use settings::Settings;
