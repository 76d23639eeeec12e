pub mod blocking;
pub mod form;

pub use blocking::run_blocking;
pub use form::FormData;
