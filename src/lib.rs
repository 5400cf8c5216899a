pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod tasks;
pub mod translate;

pub use config::Config;
pub use error::{TranslateError, TranslateResult};
pub use routes::create_routes;
pub use state::AppState;
