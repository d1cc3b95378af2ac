pub mod adjust;
pub mod config;
pub mod health;
pub mod init;
pub mod lookup;
pub mod scan;
