// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of the
// benchmark client, located in the core subdirectory. It declares submodules
// and re-exports key types for use throughout the project.

pub mod job;
pub mod sha256;
pub mod sha3x;
pub mod types;

// Re-export the most commonly used items
pub use job::JobDescriptor;
pub use sha3x::{sha3x_hash_with_nonce, sha3x_hash_with_nonce_batch};
pub use sha256::{sha256d_hash, sha256d_hash_with_nonce_batch};
pub use types::{Algorithm, Args};

// Changelog:
// - v1.1.0 (2025-07-02): Benchmark client core.
//   - Added job module with the synthetic JobDescriptor.
//   - Removed difficulty module and pool/share type exports.
// - v1.0.1 (2025-06-16): Added simple SHA-256 support.
