//! The gostart command set registered for documentation.
//!
//! Each command carries the synopsis and help text shown to users; the
//! generator reads nothing else from them. The reserved `version` entry is
//! registered like any other command and filtered out during collection.

use gostart_docgen::registry::{Command, CommandFactory, Registry};

/// Builds the registry of all gostart commands.
pub fn registry() -> Registry {
    let entries: [(&str, CommandFactory); 6] = [
        ("apply", || Box::new(ApplyCommand)),
        ("design", || Box::new(DesignCommand)),
        ("list", || Box::new(ListCommand)),
        ("new", || Box::new(NewCommand)),
        ("validate", || Box::new(ValidateCommand)),
        ("version", || Box::new(VersionCommand)),
    ];
    entries
        .iter()
        .map(|(name, factory)| ((*name).to_owned(), *factory))
        .collect()
}

struct NewCommand;

impl Command for NewCommand {
    fn synopsis(&self) -> String {
        "Generate a new command-line tool project".to_owned()
    }

    fn help(&self) -> String {
        "Usage: gostart new [option] NAME

  Generate a new command-line tool project skeleton. At minimum you must
  provide the executable name NAME. The scaffolded project contains an
  entry point, one source file per sub-command, and a README.

Options:

  -command=c1,c2      Sub-commands the generated tool starts with
  -framework=NAME     CLI framework the generated code targets
  -owner=NAME         Project owner used in the license header
  -skip-test          Do not generate test files"
            .to_owned()
    }
}

struct DesignCommand;

impl Command for DesignCommand {
    fn synopsis(&self) -> String {
        "Generate a project design template file".to_owned()
    }

    fn help(&self) -> String {
        "Usage: gostart design [option] NAME

  Generate a design template file describing the project: executable name,
  sub-commands, framework and owner. Edit the file, then pass it to the
  apply command to scaffold the project it describes.

Options:

  -output=FILE        Write the template to FILE instead of NAME-design.toml
  -owner=NAME         Project owner used in the license header"
            .to_owned()
    }
}

struct ApplyCommand;

impl Command for ApplyCommand {
    fn synopsis(&self) -> String {
        "Scaffold a project from a design template file".to_owned()
    }

    fn help(&self) -> String {
        "Usage: gostart apply [option] FILE

  Scaffold a command-line tool project from the design template FILE.
  Check the template with the validate command first; apply refuses
  templates with missing required fields.

Options:

  -skip-test          Do not generate test files"
            .to_owned()
    }
}

struct ValidateCommand;

impl Command for ValidateCommand {
    fn synopsis(&self) -> String {
        "Validate a design template file".to_owned()
    }

    fn help(&self) -> String {
        "Usage: gostart validate FILE

  Check that the design template FILE names an executable, an owner and at
  least one sub-command, and that the requested framework is available."
            .to_owned()
    }
}

struct ListCommand;

impl Command for ListCommand {
    fn synopsis(&self) -> String {
        "List supported CLI frameworks".to_owned()
    }

    fn help(&self) -> String {
        "Usage: gostart list

  Show the CLI frameworks the generator can target, one per line."
            .to_owned()
    }
}

struct VersionCommand;

impl Command for VersionCommand {
    fn synopsis(&self) -> String {
        "Print gostart version and quit".to_owned()
    }

    fn help(&self) -> String {
        "Usage: gostart version".to_owned()
    }
}
