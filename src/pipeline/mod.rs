pub mod merge;
pub mod ranking;
pub mod rookies;
