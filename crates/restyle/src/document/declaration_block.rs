//! Selector list plus declarations.

use std::fmt;

use indexmap::IndexMap;

use super::{CssNode, at_rule::write_body};
use crate::render::{CssWriter, Render, display_via_render};
use crate::rules::{Rule, RuleId, RuleSet, RuleTarget};
use crate::selector::Selector;
use crate::shorthand::{self, KeywordTables};
use crate::{Error, Result};

/// A style rule: `selector, selector { declarations }`.
///
/// Rule operations delegate to the owned [`RuleSet`]; shorthand transforms
/// use [`KeywordTables::standard`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationBlock {
    selectors: Vec<Selector>,
    rules: RuleSet,
    line: u32,
}

impl DeclarationBlock {
    /// Create an empty block for `selectors`.
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self {
            selectors,
            rules: RuleSet::new(),
            line: 0,
        }
    }

    pub(crate) fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub(crate) fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Parse text holding exactly one declaration block.
    ///
    /// ```
    /// use restyle::document::DeclarationBlock;
    ///
    /// let block = DeclarationBlock::from_css("h1 { margin: 0 }").unwrap();
    /// assert_eq!(block.to_string(), "h1 {margin: 0;}");
    /// ```
    pub fn from_css(text: &str) -> Result<Self> {
        let mut document = crate::parse(text)?;
        let mut nodes = std::mem::take(document.contents_mut()).into_nodes();
        match (nodes.pop(), nodes.is_empty()) {
            (Some(CssNode::Block(block)), true) => Ok(block),
            _ => Err(Error::syntax("expected exactly one declaration block", 1, 1)),
        }
    }

    /// The selectors, in source order.
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn set_selectors(&mut self, selectors: Vec<Selector>) {
        self.selectors = selectors;
    }

    /// Replace the selectors from selector-list text.
    pub fn set_selector_text(&mut self, text: &str) -> Result<()> {
        self.selectors = Selector::parse_list(text)?;
        Ok(())
    }

    /// Source line of the block (0 when built in code).
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    pub fn rule_set_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    /// See [`RuleSet::add_rule`].
    pub fn add_rule(&mut self, rule: Rule, before: Option<RuleId>) -> RuleId {
        self.rules.add_rule(rule, before)
    }

    /// See [`RuleSet::get_rules`].
    pub fn get_rules(&self, pattern: Option<&str>) -> Vec<&Rule> {
        self.rules.get_rules(pattern)
    }

    /// See [`RuleSet::get_rules_assoc`].
    pub fn get_rules_assoc(&self, pattern: Option<&str>) -> IndexMap<&str, &Rule> {
        self.rules.get_rules_assoc(pattern)
    }

    /// See [`RuleSet::get_rule`].
    pub fn get_rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get_rule(name)
    }

    pub fn set_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules.set_rules(rules);
    }

    /// See [`RuleSet::remove_rule`].
    pub fn remove_rule<'a>(&mut self, target: impl Into<RuleTarget<'a>>) -> usize {
        self.rules.remove_rule(target)
    }

    pub fn expand_border_shorthand(&mut self) {
        shorthand::border::expand(&mut self.rules, KeywordTables::standard());
    }

    pub fn create_border_shorthand(&mut self) {
        shorthand::border::create(&mut self.rules, KeywordTables::standard());
    }

    pub fn expand_font_shorthand(&mut self) {
        shorthand::font::expand(&mut self.rules, KeywordTables::standard());
    }

    pub fn create_font_shorthand(&mut self) {
        shorthand::font::create(&mut self.rules, KeywordTables::standard());
    }

    pub fn expand_background_shorthand(&mut self) {
        shorthand::background::expand(&mut self.rules, KeywordTables::standard());
    }

    pub fn create_background_shorthand(&mut self) {
        shorthand::background::create(&mut self.rules, KeywordTables::standard());
    }

    pub fn expand_dimensions_shorthand(&mut self) {
        shorthand::dimensions::expand(&mut self.rules, KeywordTables::standard());
    }

    pub fn create_dimensions_shorthand(&mut self) {
        shorthand::dimensions::create(&mut self.rules, KeywordTables::standard());
    }

    /// Expand every supported shorthand into longhands.
    pub fn expand_shorthands(&mut self) {
        shorthand::expand_all(&mut self.rules, KeywordTables::standard());
    }

    /// Merge longhands into shorthands where possible.
    pub fn create_shorthands(&mut self) {
        shorthand::create_all(&mut self.rules, KeywordTables::standard());
    }
}

impl Render for DeclarationBlock {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        let format = dest.format();
        dest.join(&self.selectors, &format.selector_separator)?;
        write_body(dest, self.rules.is_empty(), |dest| self.rules.write_css(dest))
    }
}

display_via_render!(DeclarationBlock);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OutputFormat;
    use crate::types::Size;

    fn block(css: &str) -> DeclarationBlock {
        DeclarationBlock::from_css(css).unwrap()
    }

    #[test]
    fn renders_selectors_and_rules() {
        let block = block("h1,h2{color:red;margin:0}");
        assert_eq!(block.to_string(), "h1, h2 {color: red;margin: 0;}");
        assert_eq!(block.render(&OutputFormat::compact()), "h1,h2{color:red;margin:0}");
    }

    #[test]
    fn empty_block_renders_braces() {
        let block = DeclarationBlock::new(Selector::parse_list("p").unwrap());
        assert_eq!(block.to_string(), "p {}");
    }

    #[test]
    fn from_css_requires_one_block() {
        assert!(DeclarationBlock::from_css("a {} b {}").is_err());
        assert!(DeclarationBlock::from_css("@media print {}").is_err());
        assert!(DeclarationBlock::from_css("").is_err());
    }

    #[test]
    fn delegates_rule_operations() {
        let mut block = block("p { left: 10px }");
        let first = block.get_rules(Some("left"))[0].id();
        block.add_rule(Rule::new("left", Size::em(16.0)), Some(first));
        assert_eq!(block.to_string(), "p {left: 16em;left: 10px;}");
        assert_eq!(block.remove_rule("left"), 2);
    }

    #[test]
    fn selector_text_can_be_replaced() {
        let mut block = block("p { color: red }");
        block.set_selector_text("a:hover,  a:focus").unwrap();
        assert_eq!(block.to_string(), "a:hover, a:focus {color: red;}");
        assert!(block.set_selector_text("a {").is_err());
    }
}
