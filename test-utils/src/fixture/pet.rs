//! Pet fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::pet;

pub const DEFAULT_NAME: &str = "Rosy";

/// Creates a pet entity model with id `3`, type `2` and owner `1`.
pub fn entity() -> pet::Model {
    pet::Model {
        id: 3,
        name: DEFAULT_NAME.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2011, 4, 17).unwrap_or_default(),
        type_id: 2,
        owner_id: Some(1),
    }
}
