pub mod config;
pub mod domain;
pub mod errors;
pub mod icons;
pub mod model;
pub mod store;
pub mod tracking;
pub mod utils;
pub mod view;
