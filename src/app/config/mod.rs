//! Settings loading from the invocation directory.

mod load_settings;

pub use load_settings::load_settings;
