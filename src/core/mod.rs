pub mod auth;
pub mod generator;
pub mod roster;
pub mod sequencer;
