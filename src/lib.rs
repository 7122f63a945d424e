// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod browser;
pub mod config;
pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod pages;
pub mod stats;
pub mod store;
