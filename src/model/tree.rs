// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundaries to the host editor.
//!
//! The syntax tree, the fragment parser, source navigation and the hover/drop hosts all live
//! outside this crate. Decorators only talk to them through these traits.

use std::fmt;

use super::geometry::BoundingBox;

/// A syntax-tree node that can be printed back to source text.
pub trait SyntaxNode {
    fn source(&self) -> String;

    /// Drops leading/trailing whitespace trivia carried over from parsing.
    fn clear_whitespace(&mut self);
}

/// The tree node a catch decorator is bound to.
pub trait CatchClause {
    type Parameter: SyntaxNode;
    /// The enclosing node (the try statement) that new fragments are built into.
    type Parent;

    /// The single caught-error parameter. Always present in a well-formed clause.
    fn parameter(&self) -> Option<&Self::Parameter>;

    fn set_parameter(&mut self, parameter: Self::Parameter);

    fn parent(&self) -> &Self::Parent;

    /// Kind of the enclosing node, used as parse context for new fragments.
    fn parent_kind(&self) -> &str;

    fn is_breakpoint(&self) -> bool;

    /// `true` while a debug session is paused on this clause.
    fn is_debug_hit(&self) -> bool {
        false
    }

    fn add_breakpoint(&mut self);

    fn remove_breakpoint(&mut self);

    /// `false` once the node has been removed from its parent.
    fn is_attached(&self) -> bool;

    fn remove(&mut self);

    /// Measured size of the nested body, once the body has been laid out.
    fn statement_box(&self) -> Option<BoundingBox>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentError {
    message: String,
}

impl FragmentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fragment parse failed: {}", self.message)
    }
}

impl std::error::Error for FragmentError {}

/// Parses raw text into syntax-tree fragments for clauses of type `N`.
pub trait FragmentService<N: CatchClause> {
    type Fragment;

    /// Parses `source` as the parameter of a catch clause.
    fn parse_parameter(&self, source: &str) -> Result<Self::Fragment, FragmentError>;

    /// Turns a parsed fragment into a parameter node attached under `parent`.
    fn build(&self, fragment: Self::Fragment, parent: &N::Parent, parent_kind: &str)
        -> N::Parameter;
}

/// Moves the source view to where a node came from.
pub trait SourceNavigator<N: ?Sized> {
    fn go_to_source(&mut self, node: &N);
}

/// Named hover-group regions a decorator exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverRegion {
    ActionBox,
    Main,
}

impl HoverRegion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActionBox => "actionBox",
            Self::Main => "main",
        }
    }
}

impl fmt::Display for HoverRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives hover hit-test boxes.
pub trait HoverSink<N: ?Sized> {
    fn register(&mut self, node: &N, region: HoverRegion, bbox: BoundingBox);
}

/// Receives the drop-zone box that accepts new body statements.
pub trait DropZoneSink<N: ?Sized> {
    fn register(&mut self, target: &N, bbox: BoundingBox);
}
