// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;

use super::geometry::BoundingBox;
use super::tree::{
    CatchClause, DropZoneSink, FragmentError, FragmentService, HoverRegion, HoverSink,
    SourceNavigator, SyntaxNode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FakeParameter {
    pub(crate) source: String,
    pub(crate) whitespace_cleared: bool,
}

impl FakeParameter {
    pub(crate) fn new(source: &str) -> Self {
        Self { source: source.to_owned(), whitespace_cleared: false }
    }
}

impl SyntaxNode for FakeParameter {
    fn source(&self) -> String {
        self.source.clone()
    }

    fn clear_whitespace(&mut self) {
        self.source = self.source.trim().to_owned();
        self.whitespace_cleared = true;
    }
}

/// The try statement a fake catch clause hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FakeTry {
    pub(crate) label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FakeCatch {
    pub(crate) parameter: Option<FakeParameter>,
    pub(crate) parent: FakeTry,
    pub(crate) parent_kind: String,
    pub(crate) breakpoint: bool,
    pub(crate) debug_hit: bool,
    pub(crate) attached: bool,
    pub(crate) remove_calls: usize,
    pub(crate) statement_box: Option<BoundingBox>,
}

impl FakeCatch {
    pub(crate) fn new(parameter: &str) -> Self {
        Self {
            parameter: Some(FakeParameter::new(parameter)),
            parent: FakeTry { label: "try#1".to_owned() },
            parent_kind: "Try".to_owned(),
            breakpoint: false,
            debug_hit: false,
            attached: true,
            remove_calls: 0,
            statement_box: Some(BoundingBox::new(100.0, 80.0, 120.0, 60.0).expect("bbox")),
        }
    }
}

impl CatchClause for FakeCatch {
    type Parameter = FakeParameter;
    type Parent = FakeTry;

    fn parameter(&self) -> Option<&FakeParameter> {
        self.parameter.as_ref()
    }

    fn set_parameter(&mut self, parameter: FakeParameter) {
        self.parameter = Some(parameter);
    }

    fn parent(&self) -> &FakeTry {
        &self.parent
    }

    fn parent_kind(&self) -> &str {
        &self.parent_kind
    }

    fn is_breakpoint(&self) -> bool {
        self.breakpoint
    }

    fn is_debug_hit(&self) -> bool {
        self.debug_hit
    }

    fn add_breakpoint(&mut self) {
        self.breakpoint = true;
    }

    fn remove_breakpoint(&mut self) {
        self.breakpoint = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn remove(&mut self) {
        self.remove_calls += 1;
        self.attached = false;
    }

    fn statement_box(&self) -> Option<BoundingBox> {
        self.statement_box
    }
}

/// Accepts anything except text containing `!!`, and records each input it saw.
#[derive(Debug, Default)]
pub(crate) struct FakeFragments {
    pub(crate) parsed: RefCell<Vec<String>>,
    /// `(parent label, parent kind)` of every build call.
    pub(crate) built_with_parent: RefCell<Vec<(String, String)>>,
}

impl FragmentService<FakeCatch> for FakeFragments {
    type Fragment = String;

    fn parse_parameter(&self, source: &str) -> Result<String, FragmentError> {
        self.parsed.borrow_mut().push(source.to_owned());
        if source.contains("!!") {
            return Err(FragmentError::new("unexpected token '!!'"));
        }
        Ok(format!(" {source} "))
    }

    fn build(&self, fragment: String, parent: &FakeTry, parent_kind: &str) -> FakeParameter {
        self.built_with_parent.borrow_mut().push((parent.label.clone(), parent_kind.to_owned()));
        FakeParameter::new(&fragment)
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) visited: Vec<Option<String>>,
}

impl SourceNavigator<FakeCatch> for RecordingNavigator {
    fn go_to_source(&mut self, node: &FakeCatch) {
        self.visited.push(node.parameter.as_ref().map(|p| p.source.clone()));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHoverSink {
    pub(crate) regions: Vec<(HoverRegion, BoundingBox)>,
}

impl HoverSink<FakeCatch> for RecordingHoverSink {
    fn register(&mut self, _node: &FakeCatch, region: HoverRegion, bbox: BoundingBox) {
        self.regions.push((region, bbox));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDropZones {
    pub(crate) zones: Vec<BoundingBox>,
}

impl DropZoneSink<FakeCatch> for RecordingDropZones {
    fn register(&mut self, _target: &FakeCatch, bbox: BoundingBox) {
        self.zones.push(bbox);
    }
}
