// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

/// A cheap, copyable identity for something mounted in a diagram.
///
/// Identities are compared by value only; the tag parameter keeps decorator
/// and region ids from being mixed up at compile time.
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(value: u64) -> Self {
        Self { value, _marker: PhantomData }
    }

    pub const fn get(self) -> u64 {
        self.value
    }
}

// Manual impls so that `T` does not need to implement these traits itself.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: IdTag> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", T::PREFIX, self.value)
    }
}

impl<T: IdTag> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", T::PREFIX, self.value)
    }
}

pub trait IdTag {
    const PREFIX: &'static str;
}

/// Hands out process-unique ids for one tag.
#[derive(Debug)]
pub struct IdAllocator<T> {
    next: AtomicU64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> IdAllocator<T> {
    pub const fn new() -> Self {
        Self { next: AtomicU64::new(1), _marker: PhantomData }
    }

    pub fn allocate(&self) -> Id<T> {
        Id::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl<T> Default for IdAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecoratorIdTag {}
pub type DecoratorId = Id<DecoratorIdTag>;

pub type DecoratorIdAllocator = IdAllocator<DecoratorIdTag>;

impl IdTag for DecoratorIdTag {
    const PREFIX: &'static str = "decorator";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionIdTag {}
pub type RegionId = Id<RegionIdTag>;

pub type RegionIdAllocator = IdAllocator<RegionIdTag>;

impl IdTag for RegionIdTag {
    const PREFIX: &'static str = "region";
}
