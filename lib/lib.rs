/// Game domain types.
pub mod game;
/// Rules enforcement.
pub mod rules;
