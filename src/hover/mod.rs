// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hover arbitration shared by every decorator in a diagram.
//!
//! Pointer events from nested regions arrive overlapping and out of order. The arbiter keeps a
//! single active slot; the region table attributes an event to a nested statement or to the
//! decorator itself.

pub mod arbiter;
pub mod driver;
pub mod regions;


pub use arbiter::{ActivationArbiter, ActivationChange, CandidateState};
pub use driver::SharedArbiter;
pub use regions::{RegionError, RegionKind, RegionTable};
