pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod input;
pub mod models;
pub mod render;
pub mod state;
pub mod ui;
pub mod view;

pub use api::{FoodApi, HttpApi};
pub use config::ClientConfig;
pub use controller::Controller;
pub use input::DishForm;
pub use state::SessionState;
pub use ui::TerminalView;
pub use view::{Dialog, Field, View};
