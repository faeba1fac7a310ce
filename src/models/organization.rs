//! Organisational hierarchy models.
//!
//! The hierarchy has three levels: an [`Organization`] (top-level division)
//! groups [`Unit`]s, and each unit may be split into [`SubUnit`]s.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A top-level division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Identifier.
    pub id: Uuid,
    /// Division name.
    pub name: String,
}

/// A unit within an organisation group.
///
/// Units are identified by a short code. For compatibility with older
/// consumers the code is also stored as the unit's `name`; the two fields are
/// kept identical at write time.
///
/// # Example
///
/// ```
/// use personnel_engine::models::Unit;
/// use uuid::Uuid;
///
/// let mut unit = Unit::new(Uuid::new_v4(), "Airside", "MO");
/// assert_eq!(unit.name, "MO");
///
/// unit.set_code("MF");
/// assert_eq!(unit.name, "MF");
/// assert_eq!(unit.code, "MF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Identifier.
    pub id: Uuid,
    /// Organisation this unit belongs to.
    pub organization_id: Uuid,
    /// Organisation group label (e.g. "Airside").
    pub org_group: String,
    /// Mirror of `code`.
    pub name: String,
    /// Short unit code (e.g. "MO").
    pub code: String,
}

impl Unit {
    /// Creates a unit with a fresh id and synchronised name/code.
    pub fn new(organization_id: Uuid, org_group: impl Into<String>, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            org_group: org_group.into(),
            name: code.clone(),
            code,
        }
    }

    /// Sets the unit code, keeping `name` in step.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.name = self.code.clone();
    }

    /// Re-establishes `name == code` before a write.
    ///
    /// The code wins when both are set; a unit written with only a name
    /// takes it as its code.
    pub fn synchronize(&mut self) {
        if self.code.trim().is_empty() {
            self.code = self.name.trim().to_string();
        }
        self.name = self.code.clone();
    }

    /// Returns true if name and code have diverged.
    pub fn is_out_of_sync(&self) -> bool {
        self.name != self.code
    }
}

/// A sub-unit of a [`Unit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubUnit {
    /// Identifier.
    pub id: Uuid,
    /// Parent unit.
    pub unit_id: Uuid,
    /// Plain display name.
    pub name: String,
}

impl SubUnit {
    /// Creates a sub-unit with a fresh id.
    pub fn new(unit_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            unit_id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unit_mirrors_code_into_name() {
        let unit = Unit::new(Uuid::new_v4(), "Airside", "MO");
        assert_eq!(unit.code, "MO");
        assert_eq!(unit.name, "MO");
        assert!(!unit.is_out_of_sync());
    }

    #[test]
    fn test_synchronize_prefers_code() {
        let mut unit = Unit::new(Uuid::new_v4(), "Airside", "MO");
        unit.name = "Movement".to_string();
        assert!(unit.is_out_of_sync());

        unit.synchronize();
        assert_eq!(unit.name, "MO");
    }

    #[test]
    fn test_synchronize_takes_name_when_code_missing() {
        let mut unit = Unit::new(Uuid::new_v4(), "Landside", "");
        unit.name = " PS ".to_string();

        unit.synchronize();
        assert_eq!(unit.code, "PS");
        assert_eq!(unit.name, "PS");
    }

    #[test]
    fn test_sub_unit_belongs_to_unit() {
        let unit = Unit::new(Uuid::new_v4(), "Airside", "MO");
        let sub_unit = SubUnit::new(unit.id, "Ramp Handling");
        assert_eq!(sub_unit.unit_id, unit.id);
    }
}
