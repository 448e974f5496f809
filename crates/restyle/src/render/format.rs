//! Output formatting options.

/// Controls the spacing the renderer puts between the pieces of a
/// stylesheet.
///
/// Spacing strings may contain `\n`; the renderer replaces every `\n` with
/// [`line_ending`](Self::line_ending) followed by one
/// [`indentation`](Self::indentation) per nesting level.
///
/// # Example
///
/// ```
/// use restyle::prelude::*;
///
/// let doc = restyle::parse("a{color:red}").unwrap();
/// assert_eq!(doc.render(&OutputFormat::default()), "a {color: red;}");
/// assert_eq!(doc.render(&OutputFormat::compact()), "a{color:red}");
/// assert_eq!(doc.render(&OutputFormat::pretty()), "a {\n\tcolor: red;\n}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    /// Between `name:` and the value.
    pub space_after_rule_name: String,
    /// After `{`, before the first declaration.
    pub space_before_rules: String,
    /// Between two declarations.
    pub space_between_rules: String,
    /// After the last declaration, before `}`.
    pub space_after_rules: String,
    /// Between two blocks of the same container.
    pub space_between_blocks: String,
    /// Between a selector list (or at-rule prelude) and `{`.
    pub space_before_opening_brace: String,
    /// Joins the selectors of one block.
    pub selector_separator: String,
    /// Joins the items of a comma-separated value list.
    pub comma_separator: String,
    /// Joins the items of a space-separated value list.
    pub space_separator: String,
    /// Joins the halves of a `/` pair.
    pub slash_separator: String,
    /// Before `!important`.
    pub space_before_important: String,
    /// One level of indentation.
    pub indentation: String,
    /// Physical line ending.
    pub line_ending: String,
    /// Terminate the last declaration of a block with `;`.
    pub semicolon_after_last_rule: bool,
    /// Render `#ff0000` as `#f00` where possible.
    pub compact_hex_colors: bool,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            space_after_rule_name: " ".into(),
            space_before_rules: String::new(),
            space_between_rules: String::new(),
            space_after_rules: String::new(),
            space_between_blocks: "\n".into(),
            space_before_opening_brace: " ".into(),
            selector_separator: ", ".into(),
            comma_separator: ", ".into(),
            space_separator: " ".into(),
            slash_separator: "/".into(),
            space_before_important: " ".into(),
            indentation: String::new(),
            line_ending: "\n".into(),
            semicolon_after_last_rule: true,
            compact_hex_colors: false,
        }
    }
}

impl OutputFormat {
    /// Smallest output: no optional whitespace at all.
    pub fn compact() -> Self {
        Self {
            space_after_rule_name: String::new(),
            space_between_blocks: String::new(),
            space_before_opening_brace: String::new(),
            selector_separator: ",".into(),
            comma_separator: ",".into(),
            space_before_important: String::new(),
            semicolon_after_last_rule: false,
            compact_hex_colors: true,
            ..Default::default()
        }
    }

    /// One declaration per line, tab-indented.
    pub fn pretty() -> Self {
        Self {
            space_before_rules: "\n".into(),
            space_between_rules: "\n".into(),
            space_after_rules: "\n".into(),
            space_between_blocks: "\n".into(),
            indentation: "\t".into(),
            ..Default::default()
        }
    }

    /// Set the indentation unit.
    pub fn indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    /// Set the line ending.
    pub fn line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    /// Set the separator between selectors.
    pub fn selector_separator(mut self, separator: impl Into<String>) -> Self {
        self.selector_separator = separator.into();
        self
    }

    /// Set whether the last declaration of a block ends with `;`.
    pub fn semicolon_after_last_rule(mut self, enabled: bool) -> Self {
        self.semicolon_after_last_rule = enabled;
        self
    }

    /// Set whether six-digit hex colors are shortened where possible.
    pub fn compact_hex_colors(mut self, enabled: bool) -> Self {
        self.compact_hex_colors = enabled;
        self
    }
}
