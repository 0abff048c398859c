//! Owner fixtures for creating in-memory test data.

use entity::owner;

pub const DEFAULT_FIRST_NAME: &str = "George";
pub const DEFAULT_LAST_NAME: &str = "Franklin";
pub const DEFAULT_ADDRESS: &str = "110 W. Liberty St.";
pub const DEFAULT_CITY: &str = "Madison";
pub const DEFAULT_TELEPHONE: &str = "6085551023";

/// Creates an owner entity model with id `1` and the default field values.
pub fn entity() -> owner::Model {
    owner::Model {
        id: 1,
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        address: DEFAULT_ADDRESS.to_string(),
        city: DEFAULT_CITY.to_string(),
        telephone: DEFAULT_TELEPHONE.to_string(),
    }
}
