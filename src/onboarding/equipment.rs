// ABOUTME: Equipment checklist selection with the exclusive bodyweight option
// ABOUTME: Selecting no-equipment clears every other item and vice versa
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use forma_core::models::Equipment;
use std::collections::BTreeSet;

/// Equipment checklist state
///
/// `no-equipment` is exclusive: it is never selected together with any other
/// option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentSelection {
    items: BTreeSet<Equipment>,
}

impl EquipmentSelection {
    /// Empty selection
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }

    /// Selection restored from a saved profile, normalized to the exclusivity rule
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = Equipment>) -> Self {
        let mut selection = Self::empty();
        for item in items {
            if !selection.contains(item) {
                selection.toggle(item);
            }
        }
        selection
    }

    /// Flip one checklist item
    pub fn toggle(&mut self, item: Equipment) {
        if self.items.remove(&item) {
            return;
        }
        if item == Equipment::NoEquipment {
            self.items.clear();
        } else {
            self.items.remove(&Equipment::NoEquipment);
        }
        self.items.insert(item);
    }

    /// Whether `item` is checked
    #[must_use]
    pub fn contains(&self, item: Equipment) -> bool {
        self.items.contains(&item)
    }

    /// Whether nothing is checked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checked items in checklist order
    #[must_use]
    pub const fn items(&self) -> &BTreeSet<Equipment> {
        &self.items
    }
}

impl Default for EquipmentSelection {
    /// New drafts start with bodyweight only
    fn default() -> Self {
        Self::from_items([Equipment::NoEquipment])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_equipment_is_exclusive() {
        let mut selection = EquipmentSelection::default();
        selection.toggle(Equipment::Dumbbells);
        selection.toggle(Equipment::Bench);
        assert!(!selection.contains(Equipment::NoEquipment));
        assert_eq!(selection.items().len(), 2);

        selection.toggle(Equipment::NoEquipment);
        assert_eq!(
            selection.items().iter().copied().collect::<Vec<_>>(),
            vec![Equipment::NoEquipment]
        );

        selection.toggle(Equipment::NoEquipment);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_restoring_conflicting_items() {
        let selection = EquipmentSelection::from_items([Equipment::NoEquipment, Equipment::Kettlebells]);
        assert_eq!(
            selection.items().iter().copied().collect::<Vec<_>>(),
            vec![Equipment::Kettlebells]
        );
    }
}
