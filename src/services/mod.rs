// Services module
// Stateful widget logic, independent of the egui front end

pub mod countdown;
pub mod database;
pub mod fit_text;
pub mod quote;
pub mod settings;
pub mod storage;
