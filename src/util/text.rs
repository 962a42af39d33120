//! Case-insensitive talent and series name handling.
//!
//! Names typed into the schedule spreadsheet are compared without regard to case
//! everywhere: change detection, talent lookups, attendance checks, and logo lookups.

/// Returns the normalized lookup key for a display name.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive name equality.
pub fn same_name(a: &str, b: &str) -> bool {
    a == b || name_key(a) == name_key(b)
}
