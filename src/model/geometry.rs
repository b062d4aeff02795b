// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// A straight connector line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    from: Point,
    to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundingBoxError {
    NegativeSize,
    NonFinite,
}

impl fmt::Display for BoundingBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSize => f.write_str("bounding box width and height must not be negative"),
            Self::NonFinite => f.write_str("bounding box coordinates must be finite"),
        }
    }
}

impl std::error::Error for BoundingBoxError {}

/// An axis-aligned rectangle in diagram coordinates.
///
/// Width and height are never negative. Boxes are values: a layout pass builds
/// fresh ones and never mutates a box it handed out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, BoundingBoxError> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(BoundingBoxError::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            return Err(BoundingBoxError::NegativeSize);
        }
        Ok(Self { x, y, width, height })
    }

    /// Builds a box from values the layout derived from already-validated inputs.
    ///
    /// Negative sizes are clamped to zero.
    pub(crate) fn from_parts(origin: Point, width: f64, height: f64) -> Self {
        Self { x: origin.x(), y: origin.y(), width: width.max(0.0), height: height.max(0.0) }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x() >= self.x && p.x() < self.right() && p.y() >= self.y && p.y() < self.bottom()
    }
}
