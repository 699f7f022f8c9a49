//! Gutendex API integration
//!
//! Searches the Project Gutenberg catalog by title/author text.
//!
//! API docs: https://gutendex.com/

pub mod dto;
mod adapter;
mod client;

pub use client::GutendexClient;
