/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
None of the options change the result of a query, only how the valuations of a query are examined.

```rust
# use otter_logic::config::{Config, SymbolOrder};
let mut config = Config::default();
assert!(config.parallel.set(true).is_ok());
assert!(config.symbol_order.set(SymbolOrder::Shuffled).is_ok());
assert!(config.parallel_depth.set(1024).is_err());
```
*/

mod config_option;
pub use config_option::{ConfigError, ConfigOption};

mod symbol_order;
pub use symbol_order::SymbolOrder;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Examine the two branches of a case split on separate threads.
    pub parallel: ConfigOption<bool>,

    /// The count of case splits, from the first, whose branches are examined on separate threads, if parallel.
    ///
    /// At most 2^depth threads are used by a single query.
    pub parallel_depth: ConfigOption<usize>,

    /// The order in which symbols are valued.
    pub symbol_order: ConfigOption<SymbolOrder>,

    /// The seed used to shuffle symbols, if shuffled.
    pub seed: ConfigOption<u64>,
}

impl Config {
    /// The count of case splits to examine on separate threads.
    pub fn fork_depth(&self) -> usize {
        match self.parallel.value {
            true => self.parallel_depth.value,
            false => 0,
        }
    }
}

impl Default for Config {
    /// The default context is configured for sequential, deterministic, checks.
    fn default() -> Self {
        Config {
            parallel: ConfigOption {
                name: "parallel",
                min: false,
                max: true,
                value: false,
            },

            parallel_depth: ConfigOption {
                name: "parallel_depth",
                min: 0,
                max: 16,
                value: 4,
            },

            symbol_order: ConfigOption {
                name: "symbol_order",
                min: SymbolOrder::MIN,
                max: SymbolOrder::MAX,
                value: SymbolOrder::Lexicographic,
            },

            seed: ConfigOption {
                name: "seed",
                min: 0,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}
