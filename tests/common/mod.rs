#![allow(dead_code)]

pub mod app;
pub mod console;
pub mod fixtures;
