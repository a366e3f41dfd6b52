//! # Logging
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter for the whole
//! process. The level comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run -p grocery-cart    # refreshes, commits, submits
//! RUST_LOG=debug cargo run -p grocery-cart   # plus store requests and payloads
//! ```
//!
//! Lines are compact and omit the module path; spans from `#[instrument]` show up
//! inline, e.g. `submit: Submit accepted message="Product added successfully"`.

/// Initializes the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
