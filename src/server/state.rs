use crate::outlet::OutletClient;

pub struct AppState {
    pub client: OutletClient,
    pub proximity_radius_km: f64,
}
