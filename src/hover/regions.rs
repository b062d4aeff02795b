// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use crate::model::ids::{DecoratorId, RegionId};

/// What a rendered region is, for hover attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Root region of a decorator.
    DecoratorRoot(DecoratorId),
    /// A nested statement (or lifeline group) that owns its own hover focus.
    FocusableChild,
    /// Anything else: connectors, labels, invisible hit rectangles.
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RegionEntry {
    kind: RegionKind,
    parent: Option<RegionId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    AlreadyRegistered(RegionId),
    UnknownParent { region: RegionId, parent: RegionId },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered(region) => write!(f, "region {region} is already registered"),
            Self::UnknownParent { region, parent } => {
                write!(f, "region {region} references unknown parent {parent}")
            }
        }
    }
}

impl std::error::Error for RegionError {}

/// Side-table of rendered regions and their containment.
///
/// Pointer events carry region ids; hit-testing walks the registered parent links instead of
/// inspecting the rendered tree. Parents must be registered before their children, so the
/// links always form a forest.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    regions: HashMap<RegionId, RegionEntry>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn register(
        &mut self,
        region: RegionId,
        kind: RegionKind,
        parent: Option<RegionId>,
    ) -> Result<(), RegionError> {
        if self.regions.contains_key(&region) {
            return Err(RegionError::AlreadyRegistered(region));
        }
        if let Some(parent) = parent {
            if !self.regions.contains_key(&parent) {
                return Err(RegionError::UnknownParent { region, parent });
            }
        }
        self.regions.insert(region, RegionEntry { kind, parent });
        Ok(())
    }

    /// Removes `region` together with every region registered below it.
    pub fn unregister(&mut self, region: RegionId) -> Option<RegionKind> {
        let kind = self.kind(region)?;
        let subtree: Vec<RegionId> = self
            .regions
            .keys()
            .copied()
            .filter(|candidate| self.is_within(Some(*candidate), region))
            .collect();
        for id in &subtree {
            self.regions.remove(id);
        }
        tracing::trace!(region = %region, removed = subtree.len(), "region subtree unregistered");
        Some(kind)
    }

    pub fn kind(&self, region: RegionId) -> Option<RegionKind> {
        self.regions.get(&region).map(|entry| entry.kind)
    }

    pub fn parent(&self, region: RegionId) -> Option<RegionId> {
        self.regions.get(&region).and_then(|entry| entry.parent)
    }

    /// `true` if some region on the walk up from `start` owns its own focus: a focusable
    /// statement or the root of another decorator.
    ///
    /// The walk stops at `root`, so the decorator's own enclosing statements never count.
    /// Starting outside `root` walks to the top of that tree. A `None` start is never in a child.
    pub fn is_in_focusable_child(&self, start: Option<RegionId>, root: RegionId) -> bool {
        self.ancestors(start)
            .take_while(|region| *region != root)
            .any(|region| {
                matches!(
                    self.kind(region),
                    Some(RegionKind::FocusableChild | RegionKind::DecoratorRoot(_))
                )
            })
    }

    /// `true` if `start` is `root` or one of its descendants.
    pub fn is_within(&self, start: Option<RegionId>, root: RegionId) -> bool {
        self.ancestors(start).any(|region| region == root)
    }

    fn ancestors(&self, start: Option<RegionId>) -> Ancestors<'_> {
        Ancestors { table: self, next: start.filter(|region| self.regions.contains_key(region)) }
    }
}

struct Ancestors<'a> {
    table: &'a RegionTable,
    next: Option<RegionId>,
}

impl Iterator for Ancestors<'_> {
    type Item = RegionId;

    fn next(&mut self) -> Option<RegionId> {
        let current = self.next?;
        self.next = self.table.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::{RegionError, RegionKind, RegionTable};
    use crate::model::ids::{DecoratorId, RegionId};

    const ROOT: RegionId = RegionId::new(1);
    const TITLE: RegionId = RegionId::new(2);
    const CHILD: RegionId = RegionId::new(3);
    const CHILD_LABEL: RegionId = RegionId::new(4);
    const OUTSIDE: RegionId = RegionId::new(5);

    // ROOT (catch decorator)
    // ├── TITLE
    // └── CHILD (nested statement)
    //     └── CHILD_LABEL
    // OUTSIDE (unrelated)
    fn table() -> RegionTable {
        let mut table = RegionTable::new();
        table.register(ROOT, RegionKind::DecoratorRoot(DecoratorId::new(1)), None).unwrap();
        table.register(TITLE, RegionKind::Plain, Some(ROOT)).unwrap();
        table.register(CHILD, RegionKind::FocusableChild, Some(ROOT)).unwrap();
        table.register(CHILD_LABEL, RegionKind::Plain, Some(CHILD)).unwrap();
        table.register(OUTSIDE, RegionKind::Plain, None).unwrap();
        table
    }

    #[test]
    fn own_regions_are_not_focusable_children() {
        let table = table();
        assert!(!table.is_in_focusable_child(Some(ROOT), ROOT));
        assert!(!table.is_in_focusable_child(Some(TITLE), ROOT));
        assert!(!table.is_in_focusable_child(None, ROOT));
    }

    #[test]
    fn nested_statement_regions_are_focusable_children() {
        let table = table();
        assert!(table.is_in_focusable_child(Some(CHILD), ROOT));
        assert!(table.is_in_focusable_child(Some(CHILD_LABEL), ROOT));
    }

    #[test]
    fn focusable_regions_outside_the_root_count() {
        let mut table = table();
        let other = RegionId::new(40);
        let other_label = RegionId::new(41);
        table.register(other, RegionKind::FocusableChild, None).unwrap();
        table.register(other_label, RegionKind::Plain, Some(other)).unwrap();

        assert!(table.is_in_focusable_child(Some(other), ROOT));
        assert!(table.is_in_focusable_child(Some(other_label), ROOT));
        assert!(!table.is_in_focusable_child(Some(OUTSIDE), ROOT));
    }

    #[test]
    fn nested_decorator_roots_count_as_focusable() {
        let mut table = table();
        let nested = RegionId::new(30);
        let nested_title = RegionId::new(31);
        let nested_kind = RegionKind::DecoratorRoot(DecoratorId::new(9));
        table.register(nested, nested_kind, Some(ROOT)).unwrap();
        table.register(nested_title, RegionKind::Plain, Some(nested)).unwrap();

        assert!(table.is_in_focusable_child(Some(nested_title), ROOT));
        assert!(!table.is_in_focusable_child(Some(nested_title), nested));
    }

    #[test]
    fn walk_stops_at_the_decorator_root() {
        let mut table = RegionTable::new();
        let outer = RegionId::new(10);
        let inner = RegionId::new(11);
        let leaf = RegionId::new(12);
        table.register(outer, RegionKind::FocusableChild, None).unwrap();
        let inner_kind = RegionKind::DecoratorRoot(DecoratorId::new(2));
        table.register(inner, inner_kind, Some(outer)).unwrap();
        table.register(leaf, RegionKind::Plain, Some(inner)).unwrap();

        // The decorator itself sits inside a focusable statement; that must not count.
        assert!(!table.is_in_focusable_child(Some(leaf), inner));
    }

    #[test]
    fn containment_follows_parent_links() {
        let table = table();
        assert!(table.is_within(Some(ROOT), ROOT));
        assert!(table.is_within(Some(CHILD_LABEL), ROOT));
        assert!(!table.is_within(Some(OUTSIDE), ROOT));
        assert!(!table.is_within(None, ROOT));
        assert!(!table.is_within(Some(RegionId::new(99)), ROOT));
    }

    #[test]
    fn register_validates_parent_and_uniqueness() {
        let mut table = table();
        assert_eq!(
            table.register(TITLE, RegionKind::Plain, None),
            Err(RegionError::AlreadyRegistered(TITLE))
        );
        let orphan = RegionId::new(20);
        let missing = RegionId::new(21);
        assert_eq!(
            table.register(orphan, RegionKind::Plain, Some(missing)),
            Err(RegionError::UnknownParent { region: orphan, parent: missing })
        );
    }

    #[test]
    fn unregister_removes_the_whole_subtree() {
        let mut table = table();
        assert_eq!(table.unregister(CHILD), Some(RegionKind::FocusableChild));
        assert_eq!(table.kind(CHILD_LABEL), None);
        assert_eq!(table.unregister(CHILD), None);
        assert_eq!(table.len(), 3);

        table.unregister(ROOT);
        assert_eq!(table.kind(TITLE), None);
        assert_eq!(table.len(), 1);
        assert_eq!(table.kind(OUTSIDE), Some(RegionKind::Plain));
    }
}
