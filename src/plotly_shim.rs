//! Indirection over Plotly's JS bindings.
//!
//! `plotly::bindings` only exists when compiling for WASM; routing calls
//! through this module keeps host builds (tests, rust-analyzer, clippy)
//! compiling.

#[cfg(target_family = "wasm")]
pub use plotly::bindings::react;

#[cfg(not(target_family = "wasm"))]
pub async fn react(_div_id: &str, _plot: &plotly::Plot) {
    unreachable!("Plotly rendering requires a WASM target");
}
