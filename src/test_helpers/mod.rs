// SPDX-License-Identifier: GPL-3.0-only
use std::net::SocketAddr;
use crate::config::Config;
use crate::store::{NewCafe, SqliteCafeStore};

/// Create an in-memory SQLite store for testing
pub async fn setup_test_store() -> SqliteCafeStore {
    SqliteCafeStore::in_memory()
        .await
        .expect("Failed to open in-memory store")
}

/// A valid cafe with the given name and fixed amenities
pub fn create_test_cafe(name: &str) -> NewCafe {
    NewCafe {
        name: name.to_string(),
        map_url: "https://goo.gl/maps/example".to_string(),
        img_url: "https://example.com/cafe.jpg".to_string(),
        location: "Shoreditch".to_string(),
        seats: "20-30".to_string(),
        has_toilet: true,
        has_wifi: true,
        has_sockets: false,
        can_take_calls: false,
        coffee_price: Some("£2.50".to_string()),
    }
}

/// Test configuration: known api_key, ephemeral port
pub fn create_test_config() -> Config {
    Config {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Use port 0 to auto-assign
        api_key: Some("test-secret".to_string()),
        log_level: "error".to_string(), // Reduce log noise in tests
        ..Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_only_overrides_what_tests_need() {
        let config = create_test_config();
        assert_eq!(config.database_path, Config::default().database_path);
        assert_eq!(config.api_key.as_deref(), Some("test-secret"));
        assert_eq!(config.bind_addr.port(), 0);
    }
}
