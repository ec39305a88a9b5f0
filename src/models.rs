// src/models.rs

//! Static, in-memory description of the command tree.
//!
//! Everything in here is built once at startup (see `cli::tree`) and never
//! mutated afterwards. Behaviour lives in `core`; these types only say *what*
//! each command does.

// --- COMMAND TREE ---

/// One positional argument of a command node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    /// Binding name, also used as the placeholder key in step templates.
    pub name: &'static str,
    /// Help line shown in usage output.
    pub help: &'static str,
    /// Accepted values. Empty means any value.
    pub choices: &'static [&'static str],
}

impl ArgSpec {
    /// An argument accepting any value.
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            choices: &[],
        }
    }

    /// An argument restricted to `choices`.
    pub const fn one_of(
        name: &'static str,
        help: &'static str,
        choices: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            help,
            choices,
        }
    }
}

/// A node of the `ghostctl <group> <action> [args]` hierarchy.
///
/// The arity of a node is the length of `args`; it is always exact.
#[derive(Debug, Clone)]
pub struct CommandNode {
    /// Name as typed on the command line.
    pub name: &'static str,
    /// One-line description for help output.
    pub about: &'static str,
    /// Longer description shown by `--help`.
    pub long_about: Option<&'static str>,
    /// Positional arguments, in order.
    pub args: Vec<ArgSpec>,
    /// Nested commands, in declaration order.
    pub children: Vec<CommandNode>,
    /// What the node runs. `None` for pure groups, which print their help.
    pub action: Option<Action>,
}

impl CommandNode {
    /// A node with no arguments, children or action.
    pub fn new(name: &'static str, about: &'static str) -> Self {
        Self {
            name,
            about,
            long_about: None,
            args: Vec::new(),
            children: Vec::new(),
            action: None,
        }
    }

    /// Sets the text shown by `--help`.
    pub fn long_about(mut self, text: &'static str) -> Self {
        self.long_about = Some(text);
        self
    }

    /// Appends a positional argument.
    pub fn arg(mut self, spec: ArgSpec) -> Self {
        self.args.push(spec);
        self
    }

    /// Appends a nested command.
    pub fn child(mut self, node: Self) -> Self {
        self.children.push(node);
        self
    }

    /// Appends several nested commands.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Makes the node run `steps`.
    pub fn recipe(mut self, steps: Vec<Step>) -> Self {
        self.action = Some(Action::Recipe(Recipe { steps }));
        self
    }

    /// Makes the node open `menu`.
    pub fn menu(mut self, menu: Menu) -> Self {
        self.action = Some(Action::Menu(menu));
        self
    }

    /// Makes the node run a builtin.
    pub fn builtin(mut self, builtin: Builtin) -> Self {
        self.action = Some(Action::Builtin(builtin));
        self
    }

    /// Finds a direct child by name.
    pub fn find_child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Number of positional arguments this node requires.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

// --- ACTIONS ---

/// What a node runs once its argv has been validated.
#[derive(Debug, Clone)]
pub enum Action {
    /// Ordered steps.
    Recipe(Recipe),
    /// An interactive menu loop.
    Menu(Menu),
    /// A builtin that needs the tree.
    Builtin(Builtin),
}

/// Actions that need the tree itself rather than a fixed recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Prints `ghostctl v<version>`.
    Version,
    /// Prints a bash or zsh completion script.
    Completion,
}

/// An ordered list of steps. Steps run in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    /// Steps, run top to bottom.
    pub steps: Vec<Step>,
}

/// What happens when an external step fails. An interrupted child ends the
/// action whichever policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Print `Error: <message>` and carry on with the next step.
    Report,
    /// Print `<message>: <error>` and end the action with a failure status.
    Abort(&'static str),
}

/// One unit of work inside a recipe.
///
/// String fields are templates: `{name}` is replaced with the positional
/// argument or prompt answer bound under `name`.
#[derive(Debug, Clone)]
pub enum Step {
    /// Prints a line.
    Notice(&'static str),
    /// Runs a program directly. The command line is split like a shell would
    /// (quotes respected) before substitution, so every substituted value stays
    /// a single argument.
    Exec {
        /// Command line template.
        command: &'static str,
        /// What a failure does to the rest of the action.
        on_failure: Failure,
    },
    /// Runs `sh -c "<script>"`. Substituted values are shell-quoted.
    Shell {
        /// Script template.
        script: &'static str,
    },
    /// Reads one line and binds it under `key`.
    Prompt {
        /// Binding the answer is stored under.
        key: &'static str,
        /// Prompt text, itself a template.
        message: &'static str,
        /// Substituted when the answer is empty.
        default: Option<&'static str>,
    },
    /// Truncates and writes a file, creating it with `mode`.
    WriteFile {
        /// Target path template.
        path: &'static str,
        /// Body template.
        contents: &'static str,
        /// Permission bits used when the file is created.
        mode: u32,
    },
    /// Runs the steps of the arm whose value equals the answer bound under
    /// `key`. An unmatched answer prints `Invalid option.` and ends the action.
    Choose {
        /// Binding to compare against.
        key: &'static str,
        /// `(value, steps)` pairs, checked in order.
        arms: Vec<(&'static str, Vec<Step>)>,
    },
}

impl Step {
    /// Prints `text` after substitution.
    pub const fn notice(text: &'static str) -> Self {
        Self::Notice(text)
    }

    /// A best-effort external step.
    pub const fn exec(command: &'static str) -> Self {
        Self::Exec {
            command,
            on_failure: Failure::Report,
        }
    }

    /// An external step whose failure aborts the rest of the action.
    pub const fn critical(command: &'static str, message: &'static str) -> Self {
        Self::Exec {
            command,
            on_failure: Failure::Abort(message),
        }
    }

    /// A best-effort `sh -c` step.
    pub const fn shell(script: &'static str) -> Self {
        Self::Shell { script }
    }

    /// Asks a question and binds the answer under `key`.
    pub const fn prompt(key: &'static str, message: &'static str) -> Self {
        Self::Prompt {
            key,
            message,
            default: None,
        }
    }

    /// Like `prompt`, with `default` used for an empty answer.
    pub const fn prompt_or(key: &'static str, message: &'static str, default: &'static str) -> Self {
        Self::Prompt {
            key,
            message,
            default: Some(default),
        }
    }

    /// Writes `contents` to `path`.
    pub const fn write(path: &'static str, contents: &'static str, mode: u32) -> Self {
        Self::WriteFile {
            path,
            contents,
            mode,
        }
    }

    /// Branches on the answer bound under `key`.
    pub fn choose(key: &'static str, arms: Vec<(&'static str, Vec<Step>)>) -> Self {
        Self::Choose { key, arms }
    }
}

// --- MENUS ---

/// How a menu is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// `0) Back`, used by menus nested under another menu.
    Back,
    /// `0) Exit`, used by menus started directly from the command line.
    Exit {
        /// Printed when the user picks `0`.
        farewell: Option<&'static str>,
    },
}

/// One numbered entry of a menu.
#[derive(Debug, Clone)]
pub struct MenuOption {
    /// Text after the option number.
    pub label: &'static str,
    /// Printed after the label as `label - description`.
    pub description: Option<&'static str>,
    /// Questions asked before dispatching; answers are bound by key.
    pub prompts: Vec<(&'static str, &'static str)>,
    /// Absolute argv, from the process root. Tokens are templates over the
    /// prompt answers.
    pub argv: Vec<&'static str>,
}

impl MenuOption {
    /// An option that dispatches `argv` as is.
    pub fn new(label: &'static str, argv: &[&'static str]) -> Self {
        Self {
            label,
            description: None,
            prompts: Vec::new(),
            argv: argv.to_vec(),
        }
    }

    /// Adds a description to the listing.
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Asks `message` before dispatching and binds the answer under `key`.
    pub fn ask(mut self, key: &'static str, message: &'static str) -> Self {
        self.prompts.push((key, message));
        self
    }
}

/// An interactive loop that re-enters the dispatcher with synthesised argv.
#[derive(Debug, Clone)]
pub struct Menu {
    /// Printed as `<title>:` above the options.
    pub title: &'static str,
    /// Text of the choice prompt.
    pub prompt: &'static str,
    /// Options numbered from 1.
    pub options: Vec<MenuOption>,
    /// How `0` is labelled and what it prints.
    pub exit: MenuExit,
}

impl Menu {
    /// An empty menu.
    pub fn new(title: &'static str, prompt: &'static str, exit: MenuExit) -> Self {
        Self {
            title,
            prompt,
            options: Vec::new(),
            exit,
        }
    }

    /// Appends an option.
    pub fn option(mut self, option: MenuOption) -> Self {
        self.options.push(option);
        self
    }
}
