pub mod host;
pub mod profile;
