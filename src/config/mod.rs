pub mod rookies;
pub mod settings;
