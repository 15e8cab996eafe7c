//! The list of runnable demos and how to dispatch to them.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use colored::Colorize;
use itertools::Itertools;
use tracing::info;

use crate::behavioral::{chain, command, iterator, state, strategy};
use crate::config::RunConfig;
use crate::creational::{abstract_factory, builder, factory_method, prototype};
use crate::error::{PatternError, Result};
use crate::structural::flyweight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    ChainOfResponsibility,
    Command,
    Iterator,
    Strategy,
    State,
    AbstractFactory,
    Builder,
    FactoryMethod,
    Flyweight,
    Prototype,
}

impl Demo {
    pub const ALL: [Demo; 10] = [
        Demo::FactoryMethod,
        Demo::AbstractFactory,
        Demo::Builder,
        Demo::Prototype,
        Demo::Flyweight,
        Demo::ChainOfResponsibility,
        Demo::Command,
        Demo::Iterator,
        Demo::State,
        Demo::Strategy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::ChainOfResponsibility => "chain",
            Demo::Command => "command",
            Demo::Iterator => "iterator",
            Demo::Strategy => "strategy",
            Demo::State => "state",
            Demo::AbstractFactory => "abstract-factory",
            Demo::Builder => "builder",
            Demo::FactoryMethod => "factory-method",
            Demo::Flyweight => "flyweight",
            Demo::Prototype => "prototype",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::ChainOfResponsibility => "Chain of Responsibility",
            Demo::Command => "Command",
            Demo::Iterator => "Iterator",
            Demo::Strategy => "Strategy",
            Demo::State => "State",
            Demo::AbstractFactory => "Abstract Factory",
            Demo::Builder => "Builder",
            Demo::FactoryMethod => "Factory Method",
            Demo::Flyweight => "Flyweight",
            Demo::Prototype => "Prototype",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Demo::ChainOfResponsibility => "pass a request along handlers until one takes it",
            Demo::Command => "wrap requests as objects an invoker can fire",
            Demo::Iterator => "walk a collection forward or backward with a cursor",
            Demo::Strategy => "swap a sorting algorithm at runtime",
            Demo::State => "change behavior when internal state changes",
            Demo::AbstractFactory => "build matching families of furniture",
            Demo::Builder => "assemble cars step by step through a director",
            Demo::FactoryMethod => "let implementors pick the product type",
            Demo::Flyweight => "share one object per distinct car description",
            Demo::Prototype => "shallow vs deep copies of a person",
        }
    }

    pub fn run(self, out: &mut dyn Write, config: &RunConfig) -> Result<()> {
        info!(demo = self.name(), "running demo");
        match self {
            Demo::ChainOfResponsibility => chain::run(out),
            Demo::Command => command::run(out),
            Demo::Iterator => match &config.words {
                Some(words) => iterator::run_with_words(out, words),
                None => iterator::run(out),
            },
            Demo::Strategy => match &config.strategy_input {
                Some(input) => strategy::run_with_input(out, input),
                None => strategy::run(out),
            },
            Demo::State => state::run(out),
            Demo::AbstractFactory => abstract_factory::run(out),
            Demo::Builder => builder::run(out),
            Demo::FactoryMethod => factory_method::run(out),
            Demo::Flyweight => flyweight::run(out),
            Demo::Prototype => prototype::run(out),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = PatternError;

    /// Accepts the kebab-case name, case-insensitively, with `_` for `-`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Demo::ALL
            .into_iter()
            .find(|demo| demo.name() == wanted)
            .ok_or_else(|| PatternError::UnknownDemo {
                name: s.to_string(),
                available: Demo::ALL.iter().map(|demo| demo.name()).join(", "),
            })
    }
}

/// Turns demo names into demos, expanding `all`. Duplicates are kept.
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Vec<Demo>> {
    let mut demos = Vec::new();
    for name in names {
        if name.as_ref().trim().eq_ignore_ascii_case("all") {
            demos.extend(Demo::ALL);
        } else {
            demos.push(name.as_ref().parse()?);
        }
    }
    Ok(demos)
}

/// Resolves `config.demos` and runs each one in order, with a banner line
/// before each demo when `config.banner` is set.
pub fn run_selected(out: &mut dyn Write, config: &RunConfig) -> Result<()> {
    let demos = resolve(&config.demos)?;
    for (i, demo) in demos.iter().enumerate() {
        if config.banner {
            if i > 0 {
                writeln!(out)?;
            }
            let banner = format!("=== {} ===", demo.title());
            writeln!(out, "{}", banner.cyan().bold())?;
        }
        demo.run(out, config)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!("Factory_Method".parse::<Demo>().unwrap(), Demo::FactoryMethod);
        assert_eq!(" ITERATOR ".parse::<Demo>().unwrap(), Demo::Iterator);
    }

    #[test]
    fn test_unknown_name() {
        let err = "visitor".parse::<Demo>().unwrap_err();
        assert!(err.to_string().contains("abstract-factory"));
    }

    #[test]
    fn test_resolve_expands_all() {
        let demos = resolve(&["strategy", "all"]).unwrap();
        assert_eq!(demos.len(), 11);
        assert_eq!(demos[0], Demo::Strategy);
        assert_eq!(&demos[1..], &Demo::ALL);
    }

    #[test]
    fn test_every_demo_writes_output() {
        let config = RunConfig::default();
        for demo in Demo::ALL {
            let mut out: Vec<u8> = Vec::new();
            demo.run(&mut out, &config).unwrap();
            assert!(!out.is_empty(), "{demo} printed nothing");
        }
    }

    #[test]
    fn test_config_overrides_inputs() {
        let config = RunConfig {
            words: Some(vec!["only".to_string()]),
            strategy_input: Some(vec!["z".to_string(), "m".to_string()]),
            ..RunConfig::default()
        };

        let mut out: Vec<u8> = Vec::new();
        Demo::Iterator.run(&mut out, &config).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("--Straight traversal--\nonly\n"));

        let mut out: Vec<u8> = Vec::new();
        Demo::Strategy.run(&mut out, &config).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("m z\n"));
    }

    #[test]
    fn test_banner_disabled_writes_no_banner() {
        let config = RunConfig {
            demos: vec!["state".to_string(), "strategy".to_string()],
            banner: false,
            ..RunConfig::default()
        };
        let mut out: Vec<u8> = Vec::new();
        run_selected(&mut out, &config).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("==="));
        assert!(text.starts_with("Context: Transition to ConcreteStateA.\n"));
        assert!(text.contains("Client: Strategy is set to normal sorting."));
    }

    #[test]
    fn test_banner_before_each_demo() {
        let config = RunConfig::default()
            .with_cli_demos(vec!["state".to_string(), "iterator".to_string()]);
        let mut out: Vec<u8> = Vec::new();
        run_selected(&mut out, &config).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("===").count(), 4);
        let state_at = text.find("=== State ===").unwrap();
        let iterator_at = text.find("=== Iterator ===").unwrap();
        assert!(state_at < iterator_at);
        assert!(text[iterator_at..].contains("--Straight traversal--"));
    }

    #[test]
    fn test_run_selected_reports_unknown_demo() {
        let config = RunConfig::default().with_cli_demos(vec!["memento".to_string()]);
        let mut out: Vec<u8> = Vec::new();
        let err = run_selected(&mut out, &config).unwrap_err();
        assert!(matches!(err, PatternError::UnknownDemo { .. }));
        assert!(out.is_empty());
    }
}
