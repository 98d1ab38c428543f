pub mod collect;
pub mod config;
pub mod show;
