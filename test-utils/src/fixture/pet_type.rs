//! Pet type fixtures for creating in-memory test data.

use entity::pet_type;

pub const DEFAULT_NAME: &str = "dog";

/// Creates a pet type entity model `{ id: 2, name: "dog" }`.
pub fn entity() -> pet_type::Model {
    pet_type::Model {
        id: 2,
        name: DEFAULT_NAME.to_string(),
    }
}
