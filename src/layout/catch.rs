// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::config::DesignerConfig;
use crate::model::geometry::{BoundingBox, Point, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The nested body has not been measured yet; render again after it has.
    NotReady,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotReady => f.write_str("catch layout not ready: statement box is not measured"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Every anchor point and box a catch block needs for one render pass.
///
/// ```text
///  (p1)        (p2)|---------|
///       -----------|  catch  |
///                  |____ ____|
///                       |(p8)
///                     __|__
///                     a = 1;
///                       |
///                      (p6)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorSet {
    top_left: Point,
    title_anchor: Point,
    title_box: BoundingBox,
    title_text: Point,
    junction: Point,
    bottom: Point,
    body_connector: Segment,
    drop_zone_anchor: Point,
    drop_zone: BoundingBox,
    condition_box: BoundingBox,
    condition_label: Point,
    expression_hit_box: BoundingBox,
    action_box: BoundingBox,
    breakpoint_marker: Point,
    breakpoint_size: f64,
    hover_action_region: BoundingBox,
    hover_main_region: BoundingBox,
}

impl AnchorSet {
    /// `p1`: the container origin shifted out by the left/top padding.
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// `p2`: left edge of the title box at its vertical center.
    pub fn title_anchor(&self) -> Point {
        self.title_anchor
    }

    pub fn title_box(&self) -> BoundingBox {
        self.title_box
    }

    pub fn title_text(&self) -> Point {
        self.title_text
    }

    /// `p8`: where the title box meets the body connector.
    pub fn junction(&self) -> Point {
        self.junction
    }

    /// `p6`: bottom terminus of the body connector.
    pub fn bottom(&self) -> Point {
        self.bottom
    }

    pub fn body_connector(&self) -> Segment {
        self.body_connector
    }

    /// Horizontal line from the enclosing statement's connector into the title box.
    pub fn entry_connector(&self, connector_start_x: f64) -> Segment {
        Segment::new(Point::new(connector_start_x, self.title_anchor.y()), self.title_anchor)
    }

    /// `p11`
    pub fn drop_zone_anchor(&self) -> Point {
        self.drop_zone_anchor
    }

    pub fn drop_zone(&self) -> BoundingBox {
        self.drop_zone
    }

    pub fn condition_box(&self) -> BoundingBox {
        self.condition_box
    }

    pub fn condition_label(&self) -> Point {
        self.condition_label
    }

    pub fn expression_hit_box(&self) -> BoundingBox {
        self.expression_hit_box
    }

    pub fn action_box(&self) -> BoundingBox {
        self.action_box
    }

    pub fn breakpoint_marker(&self) -> Point {
        self.breakpoint_marker
    }

    pub fn breakpoint_size(&self) -> f64 {
        self.breakpoint_size
    }

    pub fn hover_action_region(&self) -> BoundingBox {
        self.hover_action_region
    }

    pub fn hover_main_region(&self) -> BoundingBox {
        self.hover_main_region
    }
}

/// Computes the anchors of a catch block inside `container`.
///
/// Pure: the result depends only on the arguments. `statement_box` is the measured body;
/// without it there is no width for the condition and drop-zone boxes and the call fails
/// with [`LayoutError::NotReady`].
pub fn compute_anchors(
    container: &BoundingBox,
    style: &DesignerConfig,
    statement_box: Option<&BoundingBox>,
) -> Result<AnchorSet, LayoutError> {
    let statement_box = statement_box.ok_or(LayoutError::NotReady)?;

    let heading = style.compound_statement.heading;
    let (tw, th) = (heading.width, heading.height);
    let padding = style.compound_statement.padding;

    let p1 = Point::new(container.x() - padding.left, container.y() + padding.top);
    let p2 = Point::new(container.x() - tw / 2.0, p1.y() + th / 2.0);
    let p6 = Point::new(container.x(), container.bottom());
    let p8 = Point::new(container.x(), p2.y() + th / 2.0);
    let p11 = Point::new(p1.x(), p1.y() + th / 2.0);

    let title_box = BoundingBox::from_parts(Point::new(p2.x(), p1.y()), tw, th);
    let title_text = Point::new(
        p2.x() + style.compound_statement.text.padding,
        (p1.y() + p2.y()) / 2.0,
    );

    let statement_height = style.statement.height;
    let condition_box = BoundingBox::from_parts(
        Point::new(p2.x(), p2.y() - statement_height / 2.0),
        statement_box.width(),
        statement_height,
    );

    let action_width = 3.0 * style.action_box.width / 4.0;
    let action_box = BoundingBox::from_parts(
        Point::new(p8.x() - action_width / 2.0, p8.y()),
        action_width,
        style.action_box.height,
    );

    let breakpoint_half = style.breakpoint.size / 2.0;
    let breakpoint_marker =
        Point::new(container.right() - breakpoint_half, statement_box.y() - breakpoint_half);

    let action_region = style.hover.action_region;
    let main_region = style.hover.main_region;

    Ok(AnchorSet {
        top_left: p1,
        title_anchor: p2,
        title_box,
        title_text,
        junction: p8,
        bottom: p6,
        body_connector: Segment::new(p8, p6),
        drop_zone_anchor: p11,
        drop_zone: BoundingBox::from_parts(p11, statement_box.width(), statement_box.height()),
        condition_box,
        condition_label: Point::new(p8.x(), (p2.y() + p8.y()) / 2.0),
        expression_hit_box: BoundingBox::from_parts(p2, tw, th / 2.0),
        action_box,
        breakpoint_marker,
        breakpoint_size: style.breakpoint.size,
        hover_action_region: BoundingBox::from_parts(
            p8,
            action_region.width,
            action_region.height,
        ),
        hover_main_region: BoundingBox::from_parts(
            p8.offset(0.0, action_region.height),
            main_region.width,
            main_region.height,
        ),
    })
}
