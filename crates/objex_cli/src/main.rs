//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `objex_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the embedding UI runtime setup.
    println!("objex_core ping={}", objex_core::ping());
    println!("objex_core version={}", objex_core::core_version());
}
