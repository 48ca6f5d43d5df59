pub mod backup;
pub mod block;
pub mod book;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod inbox;
pub mod init;
pub mod list;
pub mod log;
pub mod mood;
pub mod names;
pub mod notes;
pub mod state;
