pub mod attendance;
pub mod board;
pub mod config;
pub mod init;
pub mod projection;
pub mod report;
