mod service;
mod ticker;

pub use service::CountdownService;
pub use ticker::{CountdownTicker, TickHandler};
