use serde::{Deserialize, Serialize};

/// Version the demo build advertises
pub const APP_VERSION: &str = "0.6.26-demo";
/// Build hash the demo build advertises
pub const APP_BUILD_HASH: &str = "demo-build";

/// Generic API response wrapper
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            message: None,
        }
    }
}

/// Build information reported by the health endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub build_hash: String,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: APP_VERSION.to_string(),
            build_hash: APP_BUILD_HASH.to_string(),
        }
    }
}
