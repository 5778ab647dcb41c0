// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use crate::store::error::StoreError;
use crate::store::models::{Cafe, NewCafe};

#[async_trait]
pub trait CafeStore: Send + Sync {
    /// List every cafe, ordered by id
    async fn list_cafes(&self) -> Result<Vec<Cafe>, StoreError>;

    /// Get a cafe by ID
    async fn get_cafe(&self, id: i64) -> Result<Option<Cafe>, StoreError>;

    /// First cafe (lowest id) whose location matches exactly
    async fn find_by_location(&self, location: &str) -> Result<Option<Cafe>, StoreError>;

    /// Insert a new cafe
    /// Returns the stored record with its auto-increment ID, or `DuplicateName` if the name is taken
    async fn add_cafe(&self, cafe: NewCafe) -> Result<Cafe, StoreError>;

    /// Overwrite the coffee price of a cafe
    /// Returns false when no cafe has that ID
    async fn update_price(&self, id: i64, new_price: &str) -> Result<bool, StoreError>;

    /// Delete a cafe
    /// Returns false when no cafe has that ID
    async fn remove_cafe(&self, id: i64) -> Result<bool, StoreError>;
}
