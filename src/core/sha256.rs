// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/sha256.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the SHA256d (double SHA-256) kernel used by the CPU
// benchmark backend, following the same pattern as the SHA3x implementation.

use core::array;
use sha2::{Digest, Sha256};

/// Length of the header hashed by SHA256d, nonce in the last 4 bytes
pub const HEADER_SIZE: usize = 80;

pub fn sha256d_hash(header: &[u8; HEADER_SIZE]) -> [u8; 32] {
    let first = Sha256::digest(header);
    Sha256::digest(first).into()
}

/// SHA256d for 4 consecutive nonces written little-endian at bytes 76..80
pub fn sha256d_hash_with_nonce_batch(
    header_base: &[u8; HEADER_SIZE],
    start_nonce: u32,
) -> [([u8; 32], u32); 4] {
    let mut header = *header_base;

    array::from_fn(|i| {
        let nonce = start_nonce.wrapping_add(i as u32);
        header[76..80].copy_from_slice(&nonce.to_le_bytes());
        (sha256d_hash(&header), nonce)
    })
}

/// Build an 80-byte header from an arbitrary template, zero-padded
pub fn header_from_template(template: &[u8]) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    let len = template.len().min(76);
    header[..len].copy_from_slice(&template[..len]);
    header
}


// Changelog:
// - v1.1.0 (2025-07-02): Typed 80-byte headers for the benchmark backend.
//   - Header length is enforced by the type instead of returning 0xFF hashes.
//   - Added header_from_template for building headers from job data.
//   - Removed per-hash debug logging from the hot loop.
// - v1.0.4 (2025-06-18): Fixed type mismatches and compilation errors.
