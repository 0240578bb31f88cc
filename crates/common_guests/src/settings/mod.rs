mod get_settings;
mod structs;

pub use get_settings::load_app_settings;
pub use structs::*;
