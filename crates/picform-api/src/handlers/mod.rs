pub mod convert;
pub mod crop;
pub mod index;
pub mod resize;
pub mod upload;
