pub mod checklist;
pub mod config;
pub mod gates;
pub mod mode;
