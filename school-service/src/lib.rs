pub mod app;
pub mod cart_handlers;
pub mod class_handlers;
pub mod config;
pub mod gateway;
pub mod guards;
pub mod instructor_handlers;
pub mod payment_handlers;
pub mod responses;
pub mod store;
pub mod token_handlers;
pub mod user_handlers;

pub use app::{build_router, AppState};
