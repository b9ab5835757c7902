pub mod app;
pub mod form;
pub mod types;

pub use form::ConnectionForm;
pub use types::ScreenState;
