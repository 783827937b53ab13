pub mod health;
pub mod get;
pub mod post;
pub mod put;

pub use health::health_handler;
pub use get::check_data_handler;
pub use post::write_data_handler;
pub use put::update_data_handler;
