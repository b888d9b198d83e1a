pub mod simulator;
pub mod tracker;
