use crate::Argument;

/// A named subcommand and the value handed back when it is selected.
///
/// `V` is whatever the caller dispatches on: a plain enum tag, or a
/// [`Validator`](crate::Validator) producing a richer parameter type.
#[derive(Debug, Clone)]
pub struct Command<V> {
    name: String,
    value: V,
    arguments: Vec<Argument>,
}

impl<V> Command<V> {
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
            arguments: Vec::new(),
        }
    }

    /// Append an argument. Declaration order only affects usage output.
    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_value(&self) -> &V {
        &self.value
    }

    pub fn get_arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }
}
