#![allow(non_snake_case)]

pub mod clients;
pub mod config;
pub mod handlers;
pub mod runtime;
pub mod service;
pub mod tasks;
