// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catch-block decorator for graphical source editors.
//!
//! Computes the geometry of a decorated catch clause, arbitrates which decorator in a diagram
//! shows its hover affordances, and bridges breakpoint, delete and condition edits back into
//! the host's syntax tree.

pub mod config;
pub mod decorator;
pub mod hover;
pub mod layout;
pub mod model;

pub use config::{ConfigError, DesignerConfig};
pub use decorator::{CatchDecorator, PointerEvent, TitleStyle, Visibility};
pub use hover::{ActivationArbiter, ActivationChange, RegionKind, RegionTable, SharedArbiter};
pub use layout::{compute_anchors, AnchorSet, LayoutError};
