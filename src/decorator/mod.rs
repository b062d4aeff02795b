// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The catch-block decorator.
//!
//! A decorator wraps one catch clause: it owns the clause's container box, lays out the chrome
//! around the nested body, routes pointer events to the shared arbiter and edits the clause
//! through the collaborator traits in [`crate::model::tree`]. Shared state (arbiter, region
//! table) is passed into each handler explicitly.

use std::time::Instant;

use crate::config::DesignerConfig;
use crate::hover::{ActivationArbiter, ActivationChange, RegionTable};
use crate::layout::{compute_anchors, AnchorSet, LayoutError};
use crate::model::geometry::BoundingBox;
use crate::model::ids::{DecoratorId, RegionId};
use crate::model::tree::{
    CatchClause, DropZoneSink, FragmentService, HoverRegion, HoverSink, SourceNavigator,
    SyntaxNode,
};


/// A pointer crossing into or out of a region.
///
/// `target` is the region the pointer is now over (enter) or left (leave); `related_target` is
/// the region on the other side of the crossing. `None` means outside the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerEvent {
    pub target: Option<RegionId>,
    pub related_target: Option<RegionId>,
}

impl PointerEvent {
    pub fn new(target: Option<RegionId>, related_target: Option<RegionId>) -> Self {
        Self { target, related_target }
    }
}

/// Whether the action affordances (delete, jump, breakpoint) are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// How the title box is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleStyle {
    Normal,
    /// A debugger is paused on this clause.
    DebugHit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Text,
}

/// Describes the inline property editor bound to the catch condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub property_type: PropertyType,
    pub key: &'static str,
}

pub const CATCH_CONDITION_KEY: &str = "Catch condition";

#[derive(Debug, Clone)]
pub struct CatchDecorator<N> {
    id: DecoratorId,
    root: RegionId,
    node: N,
    bbox: BoundingBox,
}

impl<N: CatchClause> CatchDecorator<N> {
    /// `root` must already be registered in the diagram's [`RegionTable`].
    pub fn new(id: DecoratorId, root: RegionId, node: N, bbox: BoundingBox) -> Self {
        Self { id, root, node, bbox }
    }

    pub fn id(&self) -> DecoratorId {
        self.id
    }

    pub fn root(&self) -> RegionId {
        self.root
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut N {
        &mut self.node
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn set_bbox(&mut self, bbox: BoundingBox) {
        self.bbox = bbox;
    }

    /// Recomputes the anchors for this render pass. Never cached.
    pub fn layout(&self, style: &DesignerConfig) -> Result<AnchorSet, LayoutError> {
        let statement_box = self.node.statement_box();
        compute_anchors(&self.bbox, style, statement_box.as_ref())
    }

    /// Hands the hover and drop-zone boxes of `anchors` to their hosts.
    pub fn publish_regions(
        &self,
        anchors: &AnchorSet,
        hover: &mut impl HoverSink<N>,
        drop_zones: &mut impl DropZoneSink<N>,
    ) {
        hover.register(&self.node, HoverRegion::ActionBox, anchors.hover_action_region());
        hover.register(&self.node, HoverRegion::Main, anchors.hover_main_region());
        drop_zones.register(&self.node, anchors.drop_zone());
    }

    /// Pointer entered a region inside this decorator.
    ///
    /// Entering a nested statement leaves activation to that statement. Arriving from any
    /// statement or decorator region delays activation so that a pass across the boundary does
    /// not flicker.
    pub fn on_pointer_over(
        &self,
        event: PointerEvent,
        regions: &RegionTable,
        arbiter: &mut ActivationArbiter,
        now: Instant,
    ) -> ActivationChange {
        if regions.is_in_focusable_child(event.target, self.root) {
            return ActivationChange::default();
        }
        if regions.is_in_focusable_child(event.related_target, self.root) {
            arbiter.ready_to_delayed_activate(self.id, now)
        } else {
            arbiter.ready_to_activate(self.id)
        }
    }

    /// Pointer left a region inside this decorator.
    ///
    /// Moves between this decorator's own regions are ignored.
    pub fn on_pointer_out(
        &self,
        event: PointerEvent,
        regions: &RegionTable,
        arbiter: &mut ActivationArbiter,
    ) -> ActivationChange {
        if regions.is_within(event.related_target, self.root) {
            return ActivationChange::default();
        }
        arbiter.ready_to_deactivate(self.id)
    }

    pub fn visibility(&self, arbiter: &ActivationArbiter) -> Visibility {
        if arbiter.is_active(self.id) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn title_style(&self) -> TitleStyle {
        if self.node.is_debug_hit() {
            TitleStyle::DebugHit
        } else {
            TitleStyle::Normal
        }
    }

    pub fn on_breakpoint_click(&mut self) {
        if self.node.is_breakpoint() {
            self.node.remove_breakpoint();
        } else {
            self.node.add_breakpoint();
        }
    }

    /// Removes the clause from its parent. Returns `false` if it was already detached.
    pub fn on_delete(&mut self) -> bool {
        if !self.node.is_attached() {
            tracing::debug!(decorator = %self.id, "delete ignored: node already detached");
            return false;
        }
        self.node.remove();
        true
    }

    pub fn on_jump_to_code_line(&self, navigator: &mut impl SourceNavigator<N>) {
        navigator.go_to_source(&self.node);
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions { property_type: PropertyType::Text, key: CATCH_CONDITION_KEY }
    }

    /// Replaces the caught parameter with `condition` parsed as a fragment.
    ///
    /// Empty input is ignored and one trailing `;` is dropped. If the fragment does not parse the
    /// edit is discarded and the previous parameter stays bound. Returns whether the parameter
    /// was replaced.
    pub fn set_catch_condition<F>(&mut self, condition: &str, fragments: &F) -> bool
    where
        F: FragmentService<N>,
    {
        if condition.is_empty() {
            return false;
        }
        let condition = condition.strip_suffix(';').unwrap_or(condition);
        if condition.is_empty() {
            return false;
        }

        let fragment = match fragments.parse_parameter(condition) {
            Ok(fragment) => fragment,
            Err(err) => {
                tracing::debug!(decorator = %self.id, error = %err, "catch condition edit discarded");
                return false;
            }
        };

        let mut parameter =
            fragments.build(fragment, self.node.parent(), self.node.parent_kind());
        parameter.clear_whitespace();
        self.node.set_parameter(parameter);
        true
    }

    /// Source text of the caught parameter.
    ///
    /// # Panics
    ///
    /// If the clause has no parameter bound, which means the syntax tree is malformed.
    pub fn catch_condition(&self) -> String {
        self.node
            .parameter()
            .map(|parameter| parameter.source())
            .expect("catch clause has no parameter bound")
    }

    /// Detaches this decorator from shared state and hands back the node.
    ///
    /// Every region registered under the decorator's root is dropped with it.
    pub fn unmount(
        self,
        regions: &mut RegionTable,
        arbiter: &mut ActivationArbiter,
    ) -> (N, ActivationChange) {
        let change = arbiter.forget(self.id);
        regions.unregister(self.root);
        (self.node, change)
    }
}
