mod common;

mod compliance;
mod service;
