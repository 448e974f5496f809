//! Stylesheet object model.
//!
//! A [`Document`] owns a [`CssList`] of top-level [`CssNode`]s. At-rule
//! blocks own nested lists; declaration blocks and at-rule sets own a
//! [`RuleSet`](crate::rules::RuleSet). Ownership only flows downward.

mod at_rule;
mod css_list;
mod declaration_block;

pub use at_rule::{AtRuleBlock, AtRuleSet, AtRuleStatement, DECLARATION_AT_RULES, holds_declarations};
pub use css_list::{CssList, CssNode};
pub use declaration_block::DeclarationBlock;

use std::fmt;
use std::path::Path;

use crate::render::{CssWriter, Render, display_via_render};
use crate::rules::RuleSet;
use crate::selector::Selector;
use crate::settings::Settings;
use crate::types::Value;
use crate::{Error, Result};

/// A parsed (or hand-built) stylesheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    contents: CssList,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_list(contents: CssList) -> Self {
        Self { contents }
    }

    /// Parse stylesheet text with the default (lenient) settings.
    pub fn from_css(text: &str) -> Result<Self> {
        crate::parse(text)
    }

    /// Read and parse a stylesheet file.
    ///
    /// In lenient mode warnings are logged and dropped; use
    /// [`parse_with`](crate::parse_with) on the file contents to inspect
    /// them.
    pub fn from_file(path: impl AsRef<Path>, settings: &Settings) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loading stylesheet");
        crate::parse_with(&text, settings).map(|outcome| outcome.document)
    }

    /// Top-level nodes.
    pub fn contents(&self) -> &CssList {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut CssList {
        &mut self.contents
    }

    /// See [`CssList::all_declaration_blocks`].
    pub fn all_declaration_blocks(&self) -> Vec<&DeclarationBlock> {
        self.contents.all_declaration_blocks()
    }

    pub fn all_declaration_blocks_mut(&mut self) -> Vec<&mut DeclarationBlock> {
        self.contents.all_declaration_blocks_mut()
    }

    /// See [`CssList::all_rule_sets`].
    pub fn all_rule_sets(&self) -> Vec<&RuleSet> {
        self.contents.all_rule_sets()
    }

    pub fn all_rule_sets_mut(&mut self) -> Vec<&mut RuleSet> {
        self.contents.all_rule_sets_mut()
    }

    /// See [`CssList::all_values`].
    pub fn all_values(&self, pattern: Option<&str>) -> Vec<&Value> {
        self.contents.all_values(pattern)
    }

    /// See [`CssList::remove_declaration_blocks_by_selector`].
    pub fn remove_declaration_blocks_by_selector(&mut self, selectors: &[Selector]) -> usize {
        self.contents.remove_declaration_blocks_by_selector(selectors)
    }

    /// Expand shorthands in every declaration block.
    pub fn expand_shorthands(&mut self) {
        for block in self.all_declaration_blocks_mut() {
            block.expand_shorthands();
        }
    }

    /// Create shorthands in every declaration block.
    pub fn create_shorthands(&mut self) {
        for block in self.all_declaration_blocks_mut() {
            block.create_shorthands();
        }
    }
}

impl Render for Document {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        self.contents.write_css(dest)
    }
}

display_via_render!(Document);
