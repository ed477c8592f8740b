pub mod engine;
pub mod order;
pub mod pick;
pub mod state;
