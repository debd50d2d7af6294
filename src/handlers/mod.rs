pub mod civic;
pub mod health;
pub mod welcome;

pub use civic::{list_bulletins, list_locations, list_parking_spaces};
pub use health::health_check;
pub use welcome::get_welcome_message;
