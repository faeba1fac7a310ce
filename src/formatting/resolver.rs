//! Resolution of an employee's organisational-unit label.
//!
//! Resolution runs an ordered [`ResolverChain`]; each [`LabelResolver`] either
//! produces a label or passes to the next one.

use std::fmt;

use crate::config::OrganizationDirectory;
use crate::models::{Employee, non_blank};

/// One tier of organisational-unit label resolution.
pub trait LabelResolver: fmt::Debug + Send + Sync {
    /// Returns a label, or `None` to defer to the next resolver.
    fn resolve(&self, employee: &Employee, directory: &OrganizationDirectory) -> Option<String>;
}

/// Formats a unit code as `"({code}) {LongName}"`.
///
/// Administrative codes and codes missing from the table are returned bare.
pub(crate) fn code_label(directory: &OrganizationDirectory, code: &str) -> String {
    let code = code.trim();
    if directory.is_administrative(code) {
        return code.to_string();
    }
    match directory.long_name(code) {
        Some(long_name) => format!("({}) {}", code, long_name),
        None => code.to_string(),
    }
}

/// Maps the short code stored on the employee through the unit-name table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectCodeResolver;

impl LabelResolver for DirectCodeResolver {
    fn resolve(&self, employee: &Employee, directory: &OrganizationDirectory) -> Option<String> {
        let code = non_blank(employee.organizational_unit.as_deref())?;
        if directory.is_administrative(code) || directory.long_name(code).is_some() {
            Some(code_label(directory, code))
        } else {
            None
        }
    }
}

/// Looks up historical (organisation name, unit long name) pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyTableResolver;

impl LabelResolver for LegacyTableResolver {
    fn resolve(&self, employee: &Employee, directory: &OrganizationDirectory) -> Option<String> {
        let organization = non_blank(employee.legacy_organization.as_deref())?;
        let unit_name = non_blank(employee.legacy_unit_name.as_deref())?;
        directory
            .legacy_label(organization, unit_name)
            .map(str::to_string)
    }
}

/// Falls back to the raw stored organisation name.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawOrganizationResolver;

impl LabelResolver for RawOrganizationResolver {
    fn resolve(&self, employee: &Employee, _directory: &OrganizationDirectory) -> Option<String> {
        non_blank(employee.legacy_organization.as_deref()).map(str::to_string)
    }
}

/// An ordered list of resolvers; the first one to produce a label wins.
#[derive(Debug)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn LabelResolver>>,
}

impl ResolverChain {
    /// Creates an empty chain.
    pub fn empty() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Direct code, then legacy table, then raw organisation name.
    pub fn standard() -> Self {
        Self::empty()
            .with(DirectCodeResolver)
            .with(LegacyTableResolver)
            .with(RawOrganizationResolver)
    }

    /// Appends a resolver to the end of the chain.
    pub fn with(mut self, resolver: impl LabelResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Runs the chain.
    pub fn resolve(&self, employee: &Employee, directory: &OrganizationDirectory) -> Option<String> {
        self.resolvers
            .iter()
            .find_map(|resolver| resolver.resolve(employee, directory))
    }
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::standard()
    }
}
