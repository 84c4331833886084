pub mod routes;
pub mod state;
pub mod v1;

pub use state::AppState;
