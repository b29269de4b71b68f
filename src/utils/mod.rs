// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for utility functions shared by the
// bench client, the runner and the binary.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: clock, cpu_info, format, user_agent

pub mod clock;
pub mod cpu_info;
pub mod format;
pub mod user_agent;

// Changelog:
// - v1.1.0 (2025-07-02): Added clock, cpu_info and user_agent submodules.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
