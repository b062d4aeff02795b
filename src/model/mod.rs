// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types and collaborator boundaries.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;
pub mod tree;

pub use geometry::{BoundingBox, BoundingBoxError, Point, Segment};
pub use ids::{
    DecoratorId, DecoratorIdAllocator, Id, IdAllocator, IdTag, RegionId, RegionIdAllocator,
};
pub use tree::{
    CatchClause, DropZoneSink, FragmentError, FragmentService, HoverRegion, HoverSink,
    SourceNavigator, SyntaxNode,
};
