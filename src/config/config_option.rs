/// A configuration option, with bounds on the value of the option.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd + std::fmt::Display> ConfigOption<T> {
    /// Sets the option to `value`, if `value` is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        let (min, max) = self.min_max();
        if min <= value && value <= max {
            self.value = value;
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds {
                name: self.name,
                min: min.to_string(),
                max: max.to_string(),
            })
        }
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds {
        name: &'static str,
        min: String,
        max: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::OutOfBounds { name, min, max } => {
                write!(f, "{name} requires a value between {min} and {max}")
            }
        }
    }
}
