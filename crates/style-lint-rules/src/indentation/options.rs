//! Indentation options.

use style_lint_core::{ConfigError, RuleConfig};

const DEFAULT_INDENTATION: usize = 4;
const DEFAULT_TAB_WIDTH: usize = 8;

/// Offsets and modes that drive the indentation engine.
///
/// Built once per run and shared read-only by every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentOptions {
    /// Body indentation relative to the enclosing construct.
    pub basic_offset: usize,
    /// Extra offset allowed for a brace on its own line.
    pub brace_adjustment: usize,
    /// `case`/`default` offset relative to `switch`.
    pub case_indent: usize,
    /// Element offset inside array initializers.
    pub array_init_indent: usize,
    /// Offset of wrapped continuation lines.
    pub line_wrapping_indentation: usize,
    /// Offset of a `throws` clause on its own line.
    pub throws_indent: usize,
    /// Require continuation lines at exactly the wrapping offset.
    pub force_strict_condition: bool,
    /// Width used to expand tab characters into columns.
    pub tab_width: usize,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            basic_offset: DEFAULT_INDENTATION,
            brace_adjustment: 0,
            case_indent: DEFAULT_INDENTATION,
            array_init_indent: DEFAULT_INDENTATION,
            line_wrapping_indentation: DEFAULT_INDENTATION,
            throws_indent: DEFAULT_INDENTATION,
            force_strict_condition: false,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl IndentOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads options from a rule table, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] for a negative or mistyped
    /// value and for a zero tab width.
    pub fn from_rule_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        let d = Self::default();
        let options = Self {
            basic_offset: config.get_usize("basic_offset", d.basic_offset)?,
            brace_adjustment: config.get_usize("brace_adjustment", d.brace_adjustment)?,
            case_indent: config.get_usize("case_indent", d.case_indent)?,
            array_init_indent: config.get_usize("array_init_indent", d.array_init_indent)?,
            line_wrapping_indentation: config
                .get_usize("line_wrapping_indentation", d.line_wrapping_indentation)?,
            throws_indent: config.get_usize("throws_indent", d.throws_indent)?,
            force_strict_condition: config
                .get_bool("force_strict_condition", d.force_strict_condition)?,
            tab_width: config.get_usize("tab_width", d.tab_width)?,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if `tab_width` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == 0 {
            return Err(ConfigError::invalid(
                "tab_width",
                self.tab_width,
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Sets the basic offset.
    #[must_use]
    pub fn basic_offset(mut self, value: usize) -> Self {
        self.basic_offset = value;
        self
    }

    /// Sets the brace adjustment.
    #[must_use]
    pub fn brace_adjustment(mut self, value: usize) -> Self {
        self.brace_adjustment = value;
        self
    }

    /// Sets the case indent.
    #[must_use]
    pub fn case_indent(mut self, value: usize) -> Self {
        self.case_indent = value;
        self
    }

    /// Sets the array initializer indent.
    #[must_use]
    pub fn array_init_indent(mut self, value: usize) -> Self {
        self.array_init_indent = value;
        self
    }

    /// Sets the line wrapping indentation.
    #[must_use]
    pub fn line_wrapping_indentation(mut self, value: usize) -> Self {
        self.line_wrapping_indentation = value;
        self
    }

    /// Sets the throws indent.
    #[must_use]
    pub fn throws_indent(mut self, value: usize) -> Self {
        self.throws_indent = value;
        self
    }

    /// Enables or disables exact matching of continuation lines.
    #[must_use]
    pub fn force_strict_condition(mut self, value: bool) -> Self {
        self.force_strict_condition = value;
        self
    }

    /// Sets the tab width.
    #[must_use]
    pub fn tab_width(mut self, value: usize) -> Self {
        self.tab_width = value;
        self
    }
}
