pub mod board;
pub mod initialize;
pub mod pool;

pub use initialize::init_db;
pub use pool::DbPool;
