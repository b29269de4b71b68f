// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/sha3x.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the SHA3x triple-hash kernel used by the CPU benchmark
// backend, located in the core subdirectory.
//
// Tree Location:
// - src/core/sha3x.rs (SHA3x algorithm implementation)
// - Depends on: sha3 crate

use core::array;
use sha3::{Digest, Sha3_256};

/// SHA3x hash (triple SHA3-256) of nonce || template || 0x01
pub fn sha3x_hash_with_nonce(header_template: &[u8], nonce: u64) -> [u8; 32] {
    let mut input = Vec::with_capacity(header_template.len() + 9);
    input.extend_from_slice(&nonce.to_le_bytes());
    input.extend_from_slice(header_template);
    input.push(1u8);

    triple_sha3(&input)
}

/// SHA3x hash for 4 consecutive nonces, reusing the input buffer
pub fn sha3x_hash_with_nonce_batch(header_template: &[u8], nonce: u64) -> [([u8; 32], u64); 4] {
    let mut input = Vec::with_capacity(header_template.len() + 9);
    input.extend_from_slice(&[0u8; 8]);
    input.extend_from_slice(header_template);
    input.push(1u8);

    array::from_fn(|i| {
        let n = nonce.wrapping_add(i as u64);
        input[0..8].copy_from_slice(&n.to_le_bytes());
        (triple_sha3(&input), n)
    })
}

fn triple_sha3(input: &[u8]) -> [u8; 32] {
    let hash1 = Sha3_256::digest(input);
    let hash2 = Sha3_256::digest(hash1);
    Sha3_256::digest(hash2).into()
}


// Changelog:
// - v1.1.0 (2025-07-02): Fixed-size outputs for the benchmark backend.
//   - Hashes are returned as [u8; 32] instead of Vec<u8>.
//   - Batch nonces use wrapping_add.
// - v1.0.1 (2025-06-14T20:40:00Z EDT): Added batch hashing optimization.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
