//! Argument specifications consumed by the help renderer.
//!
//! A parsing engine declares one [`ArgumentSpec`] per accepted argument and
//! hands them to the renderer read-only. Specs are built once at program
//! definition time and never mutated afterwards.

/// Whether an argument is matched by position or by option string.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ArgKind {
    Positional,
    Optional,
}

/// The declared default of an argument.
///
/// `Unset` and `Suppressed` are distinct on purpose: an argument without a
/// default is labeled "optional" in help output, while a suppressed default
/// produces no annotation at all.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum DefaultValue {
    /// No default was declared.
    Unset,
    /// A concrete default, shown in help output.
    Value(String),
    /// A default exists but is hidden from help output.
    Suppressed,
}

/// Declarative description of a single command-line argument.
#[derive(Clone, Debug)]
pub struct ArgumentSpec {
    /// Option strings such as `-n`/`--num`; empty for positionals.
    pub names: Vec<String>,
    /// The identifier the parsed value is stored under. Used as the display
    /// name when no option strings exist.
    pub destination: String,
    pub kind: ArgKind,
    /// False means the argument is a boolean switch.
    pub takes_value: bool,
    /// Display name of the expected value type; uppercased to form the
    /// placeholder (metavar) in help output.
    pub type_name: String,
    /// Permitted values, in declaration order.
    pub choices: Option<Vec<String>>,
    pub default: DefaultValue,
    pub required: bool,
    pub help_text: Option<String>,
}

impl ArgumentSpec {
    /// Describes a positional argument. Positionals are always required and
    /// carry no default.
    pub fn positional(destination: &str, type_name: &str) -> Self {
        Self {
            names: Vec::new(),
            destination: destination.to_string(),
            kind: ArgKind::Positional,
            takes_value: true,
            type_name: type_name.to_string(),
            choices: None,
            default: DefaultValue::Unset,
            required: true,
            help_text: None,
        }
    }

    /// Describes an optional argument that consumes a value.
    pub fn option(names: &[&str], type_name: &str) -> Self {
        let destination = names
            .last()
            .map(|name| name.trim_start_matches('-').replace('-', "_"))
            .unwrap_or_default();

        Self {
            names: names.iter().map(ToString::to_string).collect(),
            destination,
            kind: ArgKind::Optional,
            takes_value: true,
            type_name: type_name.to_string(),
            choices: None,
            default: DefaultValue::Unset,
            required: false,
            help_text: None,
        }
    }

    /// Describes a boolean switch. Its implicit false default is not a
    /// displayable value, so switches annotate as "optional" unless a
    /// default is attached explicitly.
    pub fn switch(names: &[&str]) -> Self {
        let mut spec = Self::option(names, "");
        spec.takes_value = false;
        spec
    }

    pub fn with_help(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }

    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        self.choices = Some(choices.iter().map(ToString::to_string).collect());
        self
    }

    pub fn with_default(mut self, value: &str) -> Self {
        self.default = DefaultValue::Value(value.to_string());
        self
    }

    pub fn suppress_default(mut self) -> Self {
        self.default = DefaultValue::Suppressed;
        self
    }

    pub fn require(mut self) -> Self {
        self.required = true;
        self
    }

    /// The placeholder shown in place of an actual value: the uppercased
    /// type name, or the uppercased destination when no type name exists.
    pub fn metavar(&self) -> String {
        if self.type_name.is_empty() {
            self.destination.to_uppercase()
        } else {
            self.type_name.to_uppercase()
        }
    }

    /// Name used when talking about this argument in messages.
    pub fn display_name(&self) -> &str {
        self.names
            .first()
            .map_or(self.destination.as_str(), String::as_str)
    }

    pub fn is_switch(&self) -> bool {
        self.kind == ArgKind::Optional && !self.takes_value
    }
}
