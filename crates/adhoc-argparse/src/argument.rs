/// Declaration of a single flag accepted by a [`Command`](crate::Command).
///
/// Nothing is validated here; all constraints are checked while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    name: String,
    alias: Option<String>,
    required: bool,
    description: String,
    takes_value: bool,
    default_value: Option<String>,
}

impl Argument {
    /// Create a boolean, optional flag matched by the exact token `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Alternate token accepted in place of the name (e.g. `-w` for `--window`).
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.is_empty()).then_some(alias);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the token after the flag is taken as its value.
    pub fn takes_value(mut self, takes_value: bool) -> Self {
        self.takes_value = takes_value;
        self
    }

    /// Value used when the flag is not given. Ignored for boolean flags.
    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        self.default_value = (!default_value.is_empty()).then_some(default_value);
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn is_takes_value(&self) -> bool {
        self.takes_value
    }

    pub fn get_default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}
