pub mod balance;
pub mod calendar;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod show;
pub mod start;
pub mod status;
pub mod stop;
pub mod watch;
