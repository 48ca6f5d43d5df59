pub mod backup;
pub mod blockouts;
pub mod booking;
pub mod dashboard;
pub mod log;
pub mod mood;
pub mod notes;
pub mod notifications;
pub mod overlap;
pub mod settings;
