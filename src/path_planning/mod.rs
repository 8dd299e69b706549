// Path Planning algorithms module

pub mod prm;

pub use prm::*;
