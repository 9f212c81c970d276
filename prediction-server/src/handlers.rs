// Module declaration file for handlers/

pub mod health;
pub mod predict;
pub mod ready;
pub mod root;

pub use health::health_handler;
pub use predict::predict_handler;
pub use ready::ready_handler;
pub use root::root_handler;
