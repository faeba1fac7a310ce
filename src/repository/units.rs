//! Organisational hierarchy storage.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{OrganizationDirectory, OrganizationSeed};
use crate::error::{EngineError, EngineResult};
use crate::models::{Organization, SubUnit, Unit};

/// A consistency problem in the organisational hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HierarchyIssue {
    /// An administrative top-level unit has sub-units.
    AdministrativeUnitWithSubUnits {
        /// The unit code.
        unit_code: String,
        /// How many sub-units it has.
        sub_units: usize,
    },
    /// A regular unit has no sub-units.
    UnitWithoutSubUnits {
        /// The unit code.
        unit_code: String,
    },
    /// A unit's name and code have diverged.
    NameCodeMismatch {
        /// The unit code.
        unit_code: String,
        /// The diverging name.
        name: String,
    },
    /// A unit code is missing from the long-name table.
    UnknownUnitCode {
        /// The unit code.
        unit_code: String,
    },
}

/// An immutable copy of the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchySnapshot {
    organizations: Vec<Organization>,
    units: Vec<Unit>,
    sub_units: Vec<SubUnit>,
}

impl HierarchySnapshot {
    /// Creates a snapshot from its parts.
    pub fn new(organizations: Vec<Organization>, units: Vec<Unit>, sub_units: Vec<SubUnit>) -> Self {
        Self {
            organizations,
            units,
            sub_units,
        }
    }

    /// Builds a hierarchy from seed data, synchronising unit name and code.
    pub fn from_seed(seed: &[OrganizationSeed]) -> Self {
        let mut snapshot = Self::default();
        for organization_seed in seed {
            let organization = Organization {
                id: Uuid::new_v4(),
                name: organization_seed.name.clone(),
            };
            for unit_seed in &organization_seed.units {
                let unit = Unit::new(organization.id, &unit_seed.org_group, &unit_seed.code);
                for name in &unit_seed.sub_units {
                    snapshot.sub_units.push(SubUnit::new(unit.id, name));
                }
                snapshot.units.push(unit);
            }
            snapshot.organizations.push(organization);
        }
        snapshot
    }

    /// All organisations.
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    /// All units.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Finds a unit by id.
    pub fn unit(&self, id: Uuid) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Finds a unit by code.
    pub fn unit_by_code(&self, code: &str) -> Option<&Unit> {
        let code = code.trim();
        self.units.iter().find(|unit| unit.code == code)
    }

    /// Finds a sub-unit by id.
    pub fn sub_unit(&self, id: Uuid) -> Option<&SubUnit> {
        self.sub_units.iter().find(|sub_unit| sub_unit.id == id)
    }

    /// Sub-units of a unit.
    pub fn sub_units_of(&self, unit_id: Uuid) -> impl Iterator<Item = &SubUnit> + '_ {
        self.sub_units
            .iter()
            .filter(move |sub_unit| sub_unit.unit_id == unit_id)
    }

    /// Reports inconsistencies against the lookup data.
    pub fn issues(&self, directory: &OrganizationDirectory) -> Vec<HierarchyIssue> {
        let mut issues = Vec::new();
        for unit in &self.units {
            let sub_units = self.sub_units_of(unit.id).count();
            let administrative = directory.is_administrative(&unit.code);

            if unit.is_out_of_sync() {
                issues.push(HierarchyIssue::NameCodeMismatch {
                    unit_code: unit.code.clone(),
                    name: unit.name.clone(),
                });
            }
            if directory.long_name(&unit.code).is_none() && !administrative {
                issues.push(HierarchyIssue::UnknownUnitCode {
                    unit_code: unit.code.clone(),
                });
            }
            if administrative && sub_units > 0 {
                issues.push(HierarchyIssue::AdministrativeUnitWithSubUnits {
                    unit_code: unit.code.clone(),
                    sub_units,
                });
            }
            if !administrative && sub_units == 0 {
                issues.push(HierarchyIssue::UnitWithoutSubUnits {
                    unit_code: unit.code.clone(),
                });
            }
        }
        issues
    }
}

/// Shared, mutable store for the organisational hierarchy.
#[derive(Debug, Default)]
pub struct UnitRegistry {
    hierarchy: RwLock<HierarchySnapshot>,
}

impl UnitRegistry {
    /// Creates a registry holding `snapshot`.
    pub fn new(snapshot: HierarchySnapshot) -> Self {
        Self {
            hierarchy: RwLock::new(snapshot),
        }
    }

    /// Creates a registry seeded from configuration.
    pub fn from_seed(seed: &[OrganizationSeed]) -> Self {
        let snapshot = HierarchySnapshot::from_seed(seed);
        debug!(
            organizations = snapshot.organizations.len(),
            units = snapshot.units.len(),
            sub_units = snapshot.sub_units.len(),
            "Seeded organisational hierarchy"
        );
        Self::new(snapshot)
    }

    /// Returns a copy of the current hierarchy.
    pub fn snapshot(&self) -> EngineResult<HierarchySnapshot> {
        self.hierarchy
            .read()
            .map(|hierarchy| hierarchy.clone())
            .map_err(|_| poisoned())
    }

    /// Inserts or replaces a unit, keeping its name and code identical.
    pub fn upsert_unit(&self, mut unit: Unit) -> EngineResult<Unit> {
        unit.synchronize();
        let mut hierarchy = self.hierarchy.write().map_err(|_| poisoned())?;
        match hierarchy.units.iter_mut().find(|existing| existing.id == unit.id) {
            Some(existing) => *existing = unit.clone(),
            None => hierarchy.units.push(unit.clone()),
        }
        Ok(unit)
    }

    /// Adds a sub-unit to an existing unit.
    pub fn add_sub_unit(&self, sub_unit: SubUnit) -> EngineResult<SubUnit> {
        let mut hierarchy = self.hierarchy.write().map_err(|_| poisoned())?;
        if hierarchy.unit(sub_unit.unit_id).is_none() {
            warn!(unit_id = %sub_unit.unit_id, "Sub-unit references unknown unit");
            return Err(EngineError::UnitNotFound {
                id: sub_unit.unit_id,
            });
        }
        hierarchy.sub_units.push(sub_unit.clone());
        Ok(sub_unit)
    }
}

fn poisoned() -> EngineError {
    EngineError::Storage {
        message: "hierarchy lock poisoned".to_string(),
    }
}
