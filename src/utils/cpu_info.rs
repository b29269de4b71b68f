// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/cpu_info.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file describes the host CPU for the benchmark service. The descriptor
// is sent verbatim in the create request.
//
// Tree Location:
// - src/utils/cpu_info.rs (host CPU descriptor)
// - Depends on: sysinfo, num_cpus, serde_json

use log::debug;
use serde_json::{Value, json};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

const LOG_TARGET: &str = "tari::bench::cpu_info";

#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    pub brand: String,
    pub vendor: String,
    /// Base frequency of the first CPU in MHz
    pub frequency: u64,
    pub logical_cores: usize,
    pub physical_cores: usize,
    pub arch: &'static str,
}

impl CpuInfo {
    pub fn detect() -> Self {
        let sys =
            System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()));

        let (brand, vendor, frequency) = match sys.cpus().first() {
            Some(cpu) => (
                cpu.brand().trim().to_string(),
                cpu.vendor_id().to_string(),
                cpu.frequency(),
            ),
            None => (String::from("unknown"), String::from("unknown"), 0),
        };

        let info = Self {
            brand,
            vendor,
            frequency,
            logical_cores: num_cpus::get(),
            physical_cores: num_cpus::get_physical(),
            arch: std::env::consts::ARCH,
        };
        debug!(target: LOG_TARGET, "Detected CPU: {:?}", info);
        info
    }

    pub fn to_json(&self) -> Value {
        json!({
            "brand": self.brand,
            "vendor": self.vendor,
            "frequency": self.frequency,
            "threads": self.logical_cores,
            "cores": self.physical_cores,
            "arch": self.arch,
        })
    }
}

/// Descriptor of the current host
pub fn cpu_json() -> Value {
    CpuInfo::detect().to_json()
}


// Changelog:
// - v1.0.0 (2025-07-02): Initial CPU descriptor for the create request.
