//! Command registry types and the documentation collection stage.

use std::collections::BTreeMap;

/// Name of the self-referential version command. The host tool answers it
/// from its `-version` flag handling, so it is excluded from the generated
/// command list.
pub const RESERVED_COMMAND: &str = "version";

/// Read-only capability every documented command exposes.
///
/// The generator depends only on these two accessors, never on concrete
/// command types.
pub trait Command {
    /// One-line summary shown in the command index.
    fn synopsis(&self) -> String;

    /// Full help text shown in the command's detail block.
    fn help(&self) -> String;
}

/// Zero-argument constructor for a command instance.
pub type CommandFactory = fn() -> Box<dyn Command>;

/// Mapping from command name to its factory.
///
/// The ordered map makes the generated document deterministic: iteration
/// yields names in ascending byte order regardless of how the host program
/// assembled the registry.
pub type Registry = BTreeMap<String, CommandFactory>;

/// Documentation captured from a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDoc {
    /// Registry key the command is invoked by.
    pub name: String,
    /// One-line summary; may be empty.
    pub synopsis: String,
    /// Multi-line help text; may be empty.
    pub help: String,
}

/// Instantiates every non-reserved command exactly once and captures its
/// documentation, in ascending name order.
#[must_use]
pub fn collect_docs(registry: &Registry) -> Vec<CommandDoc> {
    registry
        .iter()
        .filter(|(name, _)| name.as_str() != RESERVED_COMMAND)
        .map(|(name, factory)| {
            let command = factory();
            CommandDoc {
                name: name.clone(),
                synopsis: command.synopsis(),
                help: command.help(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "tests fail loudly on setup errors")]

    use super::*;

    struct StaticCommand {
        synopsis: &'static str,
        help: &'static str,
    }

    impl Command for StaticCommand {
        fn synopsis(&self) -> String {
            self.synopsis.to_owned()
        }

        fn help(&self) -> String {
            self.help.to_owned()
        }
    }

    fn init_command() -> Box<dyn Command> {
        Box::new(StaticCommand {
            synopsis: "initialize project",
            help: "Initialize a new project.\n\nDetails here.",
        })
    }

    fn noop_command() -> Box<dyn Command> {
        Box::new(StaticCommand {
            synopsis: "",
            help: "",
        })
    }

    fn registry_of(names: &[&str]) -> Registry {
        names
            .iter()
            .map(|name| ((*name).to_owned(), noop_command as CommandFactory))
            .collect()
    }

    #[test]
    fn reserved_command_is_dropped() {
        let registry = registry_of(&["init", RESERVED_COMMAND]);
        let docs = collect_docs(&registry);
        assert_eq!(docs.len(), 1);
        assert!(docs.iter().all(|doc| doc.name != RESERVED_COMMAND));
    }

    #[test]
    fn docs_are_sorted_by_name() {
        let registry = registry_of(&["new", "apply", "list", "design"]);
        let names: Vec<_> = collect_docs(&registry)
            .into_iter()
            .map(|doc| doc.name)
            .collect();
        assert_eq!(names, ["apply", "design", "list", "new"]);
    }

    #[test]
    fn empty_registry_yields_no_docs() {
        assert!(collect_docs(&Registry::new()).is_empty());
    }

    #[test]
    fn reserved_only_registry_yields_no_docs() {
        let registry = registry_of(&[RESERVED_COMMAND]);
        assert!(collect_docs(&registry).is_empty());
    }

    #[test]
    fn synopsis_and_help_are_captured() {
        let mut registry = Registry::new();
        registry.insert("init".to_owned(), init_command as CommandFactory);

        let docs = collect_docs(&registry);
        assert_eq!(
            docs,
            vec![CommandDoc {
                name: "init".to_owned(),
                synopsis: "initialize project".to_owned(),
                help: "Initialize a new project.\n\nDetails here.".to_owned(),
            }]
        );
    }
}
