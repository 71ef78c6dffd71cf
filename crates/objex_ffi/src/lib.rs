//! UI-facing FFI crate for the Objex catalog core.

pub mod api;
