//! Small helpers for the terminal adapter.

pub mod words;

pub use words::split_words;
