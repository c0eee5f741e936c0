#![deny(warnings)]

pub mod adapters;
pub mod app_config;
pub mod commands;
pub mod crew_error;
pub mod entities;
pub mod graphql;
pub mod pages;
pub mod ports;
pub mod queries;
