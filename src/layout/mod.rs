// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for decorated statements.
//!
//! This module maps a container box plus designer constants to the anchor points a renderer and
//! the hit-test hosts consume.

pub mod catch;

pub use catch::{compute_anchors, AnchorSet, LayoutError};
