// Models module
// Plain data types and pure functions shared by services and UI

pub mod countdown;
pub mod settings;
