use std::collections::HashSet;

use thiserror::Error;

use crate::domain::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Strict policy: a category outside the configured set is a caller
    /// bug, not something to accept silently.
    #[error("unknown zone category: {0}")]
    InvalidCategory(Category),
}

/// The single source of truth for which categories are visible.
/// Checkbox state, map filters and the scheduler all read from here and
/// mutate only through `activate` / `deactivate`; UI controls render this
/// state, they never own it.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    /// Fixed at construction, in configuration order.
    known: Vec<Category>,
    active: HashSet<Category>,
}

impl CategoryRegistry {
    /// Starts with every known category active.
    pub fn new(known: Vec<Category>) -> Self {
        let active = known.iter().cloned().collect();
        CategoryRegistry { known, active }
    }

    pub fn known_categories(&self) -> &[Category] {
        &self.known
    }

    /// Idempotent add.
    pub fn activate(&mut self, category: &Category) -> Result<(), RegistryError> {
        if !self.known.contains(category) {
            return Err(RegistryError::InvalidCategory(category.clone()));
        }
        self.active.insert(category.clone());
        Ok(())
    }

    /// Idempotent remove.
    pub fn deactivate(&mut self, category: &Category) -> Result<(), RegistryError> {
        if !self.known.contains(category) {
            return Err(RegistryError::InvalidCategory(category.clone()));
        }
        self.active.remove(category);
        Ok(())
    }

    pub fn is_active(&self, category: &Category) -> bool {
        self.active.contains(category)
    }

    /// Defensive copy in configuration order, for the map filter and other
    /// consumers. Mutating the copy cannot touch registry state.
    pub fn snapshot(&self) -> Vec<Category> {
        self.known
            .iter()
            .filter(|c| self.active.contains(*c))
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CategoryRegistry {
        CategoryRegistry::new(vec![
            Category::new("school"),
            Category::new("playground"),
            Category::new("pedestrian_zone"),
        ])
    }

    #[test]
    fn test_starts_all_active() {
        let reg = registry();
        assert_eq!(reg.active_count(), 3);
        assert!(reg.is_active(&Category::new("school")));
    }

    #[test]
    fn test_activate_deactivate_idempotent() {
        let mut reg = registry();
        let school = Category::new("school");

        reg.deactivate(&school).unwrap();
        reg.deactivate(&school).unwrap();
        assert!(!reg.is_active(&school));
        assert_eq!(reg.active_count(), 2);

        reg.activate(&school).unwrap();
        let snapshot_once = reg.snapshot();
        reg.activate(&school).unwrap();
        assert_eq!(reg.snapshot(), snapshot_once);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut reg = registry();
        let bogus = Category::new("casino");
        assert_eq!(
            reg.activate(&bogus),
            Err(RegistryError::InvalidCategory(bogus.clone()))
        );
        assert_eq!(
            reg.deactivate(&bogus),
            Err(RegistryError::InvalidCategory(bogus))
        );
        assert_eq!(reg.active_count(), 3);
    }

    #[test]
    fn test_snapshot_is_a_defensive_copy_in_config_order() {
        let mut reg = registry();
        reg.deactivate(&Category::new("playground")).unwrap();

        let mut snap = reg.snapshot();
        assert_eq!(
            snap,
            vec![Category::new("school"), Category::new("pedestrian_zone")]
        );

        snap.clear();
        assert_eq!(reg.active_count(), 2);
    }
}
