//! Display labels for units and employee placements.

use crate::config::OrganizationDirectory;
use crate::models::{Employee, SubUnit, Unit};

use super::resolver::{ResolverChain, code_label};

/// Produces the textual forms of the organisational hierarchy.
///
/// Charts use the bare unit code so that series stay stable when long names
/// change; forms use `"(code) Long Name"`.
///
/// # Example
///
/// ```
/// use personnel_engine::config::OrganizationDirectory;
/// use personnel_engine::formatting::HierarchyFormatter;
/// use personnel_engine::models::Unit;
/// use uuid::Uuid;
///
/// let formatter = HierarchyFormatter::new(OrganizationDirectory::new(
///     [("MO", "Movement Operations")],
///     ["EGM", "GM"],
/// ));
/// let unit = Unit::new(Uuid::new_v4(), "Airside", "MO");
///
/// assert_eq!(formatter.dashboard_label(&unit), "MO");
/// assert_eq!(formatter.form_label(&unit), "(MO) Movement Operations");
/// ```
#[derive(Debug)]
pub struct HierarchyFormatter {
    directory: OrganizationDirectory,
    resolvers: ResolverChain,
}

impl HierarchyFormatter {
    /// Creates a formatter with the standard resolver chain.
    pub fn new(directory: OrganizationDirectory) -> Self {
        Self::with_resolvers(directory, ResolverChain::standard())
    }

    /// Creates a formatter with a custom resolver chain.
    pub fn with_resolvers(directory: OrganizationDirectory, resolvers: ResolverChain) -> Self {
        Self {
            directory,
            resolvers,
        }
    }

    /// Returns the lookup data.
    pub fn directory(&self) -> &OrganizationDirectory {
        &self.directory
    }

    /// The bare unit code.
    pub fn dashboard_label(&self, unit: &Unit) -> String {
        unit.code.trim().to_string()
    }

    /// `"({code}) {LongName}"`, or the bare code for administrative units and
    /// codes missing from the table.
    pub fn form_label(&self, unit: &Unit) -> String {
        code_label(&self.directory, &unit.code)
    }

    /// Resolves the employee's organisational-unit label, or the
    /// not-available sentinel.
    pub fn organizational_unit_label(&self, employee: &Employee) -> String {
        self.resolvers
            .resolve(employee, &self.directory)
            .unwrap_or_else(|| self.directory.not_available.clone())
    }

    /// Joins the employee's placement into one line.
    ///
    /// Pieces, in order: the resolved organisational-unit label (when the
    /// chain finds one), the unit's form label unless the first piece already
    /// shows it (the same label, or the unit's known long name), and the
    /// sub-unit name.
    pub fn full_structure_label(
        &self,
        employee: &Employee,
        unit: Option<&Unit>,
        sub_unit: Option<&SubUnit>,
    ) -> String {
        let mut pieces: Vec<String> = Vec::with_capacity(3);

        let organizational = self.resolvers.resolve(employee, &self.directory);
        if let Some(label) = &organizational {
            pieces.push(label.clone());
        }

        if let Some(unit) = unit {
            let form = self.form_label(unit);
            let long_name = self
                .directory
                .long_name(&unit.code)
                .filter(|name| !name.is_empty());
            let already_shown = organizational.as_deref().is_some_and(|label| {
                label == form || long_name.is_some_and(|name| label.contains(name))
            });
            if !already_shown && !form.is_empty() {
                pieces.push(form);
            }
        }

        if let Some(sub_unit) = sub_unit {
            let name = sub_unit.name.trim();
            if !name.is_empty() {
                pieces.push(name.to_string());
            }
        }

        if pieces.is_empty() {
            self.directory.not_available.clone()
        } else {
            pieces.join(&self.directory.separator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewEmployee;
    use chrono::Utc;
    use uuid::Uuid;

    fn formatter() -> HierarchyFormatter {
        HierarchyFormatter::new(
            OrganizationDirectory::new(
                [
                    ("EGM", "Executive General Manager"),
                    ("GM", "General Manager"),
                    ("MO", "Movement Operations"),
                    ("MS", "Movement Service"),
                ],
                ["EGM", "GM"],
            )
            .with_legacy_unit("Pelayanan Penumpang", "Passenger Service", "(MS) Movement Service"),
        )
    }

    fn unit(org_group: &str, code: &str) -> Unit {
        Unit::new(Uuid::new_v4(), org_group, code)
    }

    fn employee(organizational_unit: Option<&str>) -> Employee {
        NewEmployee {
            employee_number: "GH-0300".to_string(),
            full_name: "Dewi".to_string(),
            organizational_unit: organizational_unit.map(str::to_string),
            ..Default::default()
        }
        .into_employee(Utc::now())
    }

    #[test]
    fn test_movement_operations_labels() {
        let mo = unit("Airside", "MO");
        assert_eq!(formatter().form_label(&mo), "(MO) Movement Operations");
        assert_eq!(formatter().dashboard_label(&mo), "MO");
    }

    #[test]
    fn test_dashboard_label_ignores_org_group() {
        for group in ["Airside", "Landside", "Administration", ""] {
            assert_eq!(formatter().dashboard_label(&unit(group, "MS")), "MS");
        }
    }

    #[test]
    fn test_form_label_for_administrative_codes_is_bare() {
        assert_eq!(formatter().form_label(&unit("Administration", "EGM")), "EGM");
        assert_eq!(formatter().form_label(&unit("Administration", "GM")), "GM");
    }

    #[test]
    fn test_form_label_for_unknown_code_is_bare() {
        assert_eq!(formatter().form_label(&unit("Airside", "QQ")), "QQ");
    }

    #[test]
    fn test_organizational_unit_label_sentinel() {
        assert_eq!(formatter().organizational_unit_label(&employee(None)), "-");
        assert_eq!(
            formatter().organizational_unit_label(&employee(Some("MS"))),
            "(MS) Movement Service"
        );
    }

    #[test]
    fn test_full_structure_label_skips_repeated_unit() {
        let mo = unit("Airside", "MO");
        let ramp = SubUnit::new(mo.id, "Ramp Handling");
        assert_eq!(
            formatter().full_structure_label(&employee(Some("MO")), Some(&mo), Some(&ramp)),
            "(MO) Movement Operations - Ramp Handling"
        );
    }

    #[test]
    fn test_full_structure_label_with_distinct_pieces() {
        let mo = unit("Airside", "MO");
        let ramp = SubUnit::new(mo.id, "Ramp Handling");
        assert_eq!(
            formatter().full_structure_label(&employee(Some("MS")), Some(&mo), Some(&ramp)),
            "(MS) Movement Service - (MO) Movement Operations - Ramp Handling"
        );
    }

    #[test]
    fn test_full_structure_label_keeps_unknown_unit_code() {
        let stray = unit("Airside", "O");
        assert_eq!(
            formatter().full_structure_label(&employee(Some("MO")), Some(&stray), None),
            "(MO) Movement Operations - O"
        );
    }

    #[test]
    fn test_full_structure_label_skips_repeated_bare_code() {
        let gm = unit("Administration", "GM");
        assert_eq!(
            formatter().full_structure_label(&employee(Some("GM")), Some(&gm), None),
            "GM"
        );
        assert_eq!(
            formatter().full_structure_label(&employee(Some("EGM")), Some(&gm), None),
            "EGM - GM"
        );
    }

    #[test]
    fn test_full_structure_label_without_organizational_unit() {
        let gm = unit("Administration", "GM");
        assert_eq!(
            formatter().full_structure_label(&employee(None), Some(&gm), None),
            "GM"
        );
    }

    #[test]
    fn test_full_structure_label_falls_back_to_sentinel() {
        assert_eq!(
            formatter().full_structure_label(&employee(None), None, None),
            "-"
        );
    }
}
