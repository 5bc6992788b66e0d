//! # Chain Inspector Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks
//! └── src/integration/  # flows across storage, RPC, consensus, diagnostics and CLI
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ci-tests
//! cargo bench -p ci-tests
//! ```

pub mod integration;
