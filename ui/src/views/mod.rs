mod home;
pub use home::Home;

mod services;
pub use services::Services;
