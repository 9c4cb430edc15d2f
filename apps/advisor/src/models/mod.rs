pub mod insight;
pub mod solution;
