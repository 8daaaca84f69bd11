//! Storage implementations for the cube food list.
//!
//! The core only sees [`cube_core::FoodStorage`]; this crate provides the
//! JSON file backend the CLI wires in at start-up.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod json_file;

pub use json_file::JsonFileStorage;
