// SPDX-License-Identifier: GPL-3.0-only
pub mod error;
pub mod models;
pub mod sqlite;
pub mod traits;

pub use error::StoreError;
pub use models::{Cafe, NewCafe};
pub use sqlite::SqliteCafeStore;
pub use traits::CafeStore;
