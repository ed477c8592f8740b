// Library root: snake draft engine, player pool, and league configuration.

pub mod config;
pub mod draft;
pub mod player;
pub mod pool;
