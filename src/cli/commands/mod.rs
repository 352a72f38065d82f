pub mod add;
pub mod config;
pub mod del;
pub mod draft;
pub mod init;
pub mod list;
pub mod samples;
