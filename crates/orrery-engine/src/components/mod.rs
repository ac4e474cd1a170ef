pub mod body;
pub mod starfield;
pub mod streak;
