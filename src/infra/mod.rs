//! Infrastructure layer (adapters/implementations).
//!
//! Currently SQLite persistence only; transport adapters live in the
//! consuming application.

pub mod db;
