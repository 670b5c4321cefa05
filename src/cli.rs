use crate::Animal;
use crate::Cat;
use crate::Dog;
use crate::Registry;
use crate::Result;
use clap::Parser;
use std::io::Write;

/// Talks to a cat and a dog, then lists the methods of a class
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "animals", version)]
pub struct Config {
    /// Class whose methods are listed (full or short name)
    #[arg(long, default_value = "project::Dog")]
    pub class: String,

    /// Also list fields after the methods
    #[arg(long)]
    pub fields: bool,

    /// Include members declared on base classes
    #[arg(long)]
    pub inherited: bool,

    /// Print the registered class names and exit
    #[arg(long)]
    pub list_classes: bool,

    /// Skip the talk lines
    #[arg(long)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class: "project::Dog".to_owned(),
            fields: false,
            inherited: false,
            list_classes: false,
            quiet: false,
        }
    }
}

pub fn run(config: &Config, out: &mut dyn Write) -> Result<()> {
    let registry = Registry::global();

    if config.list_classes {
        for cls in registry.classes() {
            writeln!(out, "{}", cls.full_name())?;
        }
        return Ok(());
    }

    // Resolve first so a bad --class fails before anything is printed
    let cls = registry.lookup(&config.class)?;
    tracing::debug!(class = cls.full_name(), "listing members");

    if !config.quiet {
        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Cat::new()), Box::new(Dog::new())];
        for animal in &animals {
            animal.talk(out)?;
        }
    }

    let methods = if config.inherited {
        registry.all_methods(cls)?
    } else {
        cls.methods().collect()
    };
    for method in methods {
        writeln!(out, "{}", method.full_name())?;
    }

    if config.fields {
        let fields = if config.inherited {
            registry.all_fields(cls)?
        } else {
            cls.fields().collect()
        };
        for field in fields {
            writeln!(out, "{}", field.full_name())?;
        }
    }

    out.flush()?;
    Ok(())
}
