pub mod config;
pub mod data;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod screens;
pub mod session;
pub mod shutdown;
