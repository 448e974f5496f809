//! Ordered node container shared by documents and at-rule blocks.

use std::fmt;

use super::{AtRuleBlock, AtRuleSet, AtRuleStatement, DeclarationBlock};
use crate::render::{CssWriter, Render, display_via_render};
use crate::rules::{RuleSet, matches_pattern};
use crate::selector::Selector;
use crate::types::Value;

/// A top-level or nested node.
#[derive(Debug, Clone, PartialEq)]
pub enum CssNode {
    /// `selectors { declarations }`
    Block(DeclarationBlock),
    /// At-rule with nested rules (`@media`, `@supports`, ...).
    AtRuleBlock(AtRuleBlock),
    /// At-rule with declarations (`@font-face`, `@page`, ...).
    AtRuleSet(AtRuleSet),
    /// At-rule terminated by `;` (`@import`, `@charset`, ...).
    AtRuleStatement(AtRuleStatement),
}

impl From<DeclarationBlock> for CssNode {
    fn from(block: DeclarationBlock) -> Self {
        CssNode::Block(block)
    }
}

impl From<AtRuleBlock> for CssNode {
    fn from(block: AtRuleBlock) -> Self {
        CssNode::AtRuleBlock(block)
    }
}

impl From<AtRuleSet> for CssNode {
    fn from(set: AtRuleSet) -> Self {
        CssNode::AtRuleSet(set)
    }
}

impl From<AtRuleStatement> for CssNode {
    fn from(statement: AtRuleStatement) -> Self {
        CssNode::AtRuleStatement(statement)
    }
}

/// Ordered list of nodes. Order is significant and preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssList {
    nodes: Vec<CssNode>,
}

impl CssList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct children in order.
    pub fn nodes(&self) -> &[CssNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [CssNode] {
        &mut self.nodes
    }

    pub fn into_nodes(self) -> Vec<CssNode> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node at the end.
    pub fn append(&mut self, node: impl Into<CssNode>) {
        self.nodes.push(node.into());
    }

    /// Insert a node at `index`, clamped to the end of the list.
    pub fn insert(&mut self, index: usize, node: impl Into<CssNode>) {
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node.into());
    }

    /// Remove and return the node at `index`.
    pub fn remove(&mut self, index: usize) -> Option<CssNode> {
        (index < self.nodes.len()).then(|| self.nodes.remove(index))
    }

    /// Every declaration block, depth-first through nested at-rule blocks.
    pub fn all_declaration_blocks(&self) -> Vec<&DeclarationBlock> {
        let mut blocks = Vec::new();
        collect_blocks(&self.nodes, &mut blocks);
        blocks
    }

    /// Mutable form of [`all_declaration_blocks`](Self::all_declaration_blocks).
    pub fn all_declaration_blocks_mut(&mut self) -> Vec<&mut DeclarationBlock> {
        let mut blocks = Vec::new();
        collect_blocks_mut(&mut self.nodes, &mut blocks);
        blocks
    }

    /// Every rule set: those of declaration blocks and of at-rule sets.
    pub fn all_rule_sets(&self) -> Vec<&RuleSet> {
        let mut sets = Vec::new();
        collect_rule_sets(&self.nodes, &mut sets);
        sets
    }

    pub fn all_rule_sets_mut(&mut self) -> Vec<&mut RuleSet> {
        let mut sets = Vec::new();
        collect_rule_sets_mut(&mut self.nodes, &mut sets);
        sets
    }

    /// Leaf values of every rule whose name matches `pattern` (all rules
    /// when `None`), in document order.
    ///
    /// Lists and pairs are flattened into their items. Functions are
    /// returned whole.
    pub fn all_values(&self, pattern: Option<&str>) -> Vec<&Value> {
        let mut values = Vec::new();
        for set in self.all_rule_sets() {
            for rule in set.iter() {
                if pattern.is_none_or(|p| matches_pattern(rule.name(), p)) {
                    collect_leaves(rule.value(), &mut values);
                }
            }
        }
        values
    }

    /// Remove every declaration block (including nested ones) whose selector
    /// list equals `selectors`. Returns the number removed.
    pub fn remove_declaration_blocks_by_selector(&mut self, selectors: &[Selector]) -> usize {
        let before = self.nodes.len();
        self.nodes
            .retain(|node| !matches!(node, CssNode::Block(block) if block.selectors() == selectors));
        let mut removed = before - self.nodes.len();
        for node in &mut self.nodes {
            if let CssNode::AtRuleBlock(at_rule) = node {
                removed += at_rule.contents_mut().remove_declaration_blocks_by_selector(selectors);
            }
        }
        removed
    }
}

fn collect_blocks<'a>(nodes: &'a [CssNode], out: &mut Vec<&'a DeclarationBlock>) {
    for node in nodes {
        match node {
            CssNode::Block(block) => out.push(block),
            CssNode::AtRuleBlock(at_rule) => collect_blocks(at_rule.contents().nodes(), out),
            CssNode::AtRuleSet(_) | CssNode::AtRuleStatement(_) => {}
        }
    }
}

fn collect_blocks_mut<'a>(nodes: &'a mut [CssNode], out: &mut Vec<&'a mut DeclarationBlock>) {
    for node in nodes {
        match node {
            CssNode::Block(block) => out.push(block),
            CssNode::AtRuleBlock(at_rule) => collect_blocks_mut(at_rule.contents_mut().nodes_mut(), out),
            CssNode::AtRuleSet(_) | CssNode::AtRuleStatement(_) => {}
        }
    }
}

fn collect_rule_sets<'a>(nodes: &'a [CssNode], out: &mut Vec<&'a RuleSet>) {
    for node in nodes {
        match node {
            CssNode::Block(block) => out.push(block.rule_set()),
            CssNode::AtRuleSet(set) => out.push(set.rule_set()),
            CssNode::AtRuleBlock(at_rule) => collect_rule_sets(at_rule.contents().nodes(), out),
            CssNode::AtRuleStatement(_) => {}
        }
    }
}

fn collect_rule_sets_mut<'a>(nodes: &'a mut [CssNode], out: &mut Vec<&'a mut RuleSet>) {
    for node in nodes {
        match node {
            CssNode::Block(block) => out.push(block.rule_set_mut()),
            CssNode::AtRuleSet(set) => out.push(set.rule_set_mut()),
            CssNode::AtRuleBlock(at_rule) => collect_rule_sets_mut(at_rule.contents_mut().nodes_mut(), out),
            CssNode::AtRuleStatement(_) => {}
        }
    }
}

fn collect_leaves<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::List(list) => {
            for item in &list.items {
                collect_leaves(item, out);
            }
        }
        Value::Pair(first, second) => {
            collect_leaves(first, out);
            collect_leaves(second, out);
        }
        Value::Size(_)
        | Value::Keyword(_)
        | Value::Color(_)
        | Value::String(_)
        | Value::Url(_)
        | Value::Function(_) => out.push(value),
    }
}

impl Render for CssNode {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        match self {
            CssNode::Block(block) => block.write_css(dest),
            CssNode::AtRuleBlock(at_rule) => at_rule.write_css(dest),
            CssNode::AtRuleSet(set) => set.write_css(dest),
            CssNode::AtRuleStatement(statement) => statement.write_css(dest),
        }
    }
}

impl Render for CssList {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        let format = dest.format();
        dest.join(&self.nodes, &format.space_between_blocks)
    }
}

display_via_render!(CssNode, CssList);
