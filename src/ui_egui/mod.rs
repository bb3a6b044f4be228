mod app;
pub mod fit_label;
pub mod layout;
pub mod theme;

pub use app::CountdownApp;
