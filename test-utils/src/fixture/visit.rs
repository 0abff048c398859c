//! Visit fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::visit;

pub const DEFAULT_DESCRIPTION: &str = "rabies shot";

/// Creates a visit entity model with id `2` for pet `3`.
pub fn entity() -> visit::Model {
    visit::Model {
        id: 2,
        pet_id: 3,
        visit_date: NaiveDate::from_ymd_opt(2013, 1, 2).unwrap_or_default(),
        description: DEFAULT_DESCRIPTION.to_string(),
    }
}
