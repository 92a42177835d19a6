#![allow(non_snake_case)]

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod layouts;
pub mod privacy;
pub mod util;
