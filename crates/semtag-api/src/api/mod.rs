//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_supported_languages, get_tag};
pub use routes::{create_router, run_server};
pub use state::AppState;
