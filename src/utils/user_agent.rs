/// User agent sent to the benchmark service
pub fn user_agent() -> String {
    format!(
        "sha3x-bench/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Version string reported in the create request
pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
