use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

/// Characters that make a command string need a shell.
const SHELL_METACHARACTERS: &[char] = &[
    '&', '|', ';', '<', '>', '(', ')', '$', '`', '\\', '"', '\'', '*', '?', '[', ']', '{', '}',
    '~', '#', '=', '!',
];

/// How a script's command string is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandForm {
    /// A single program reference, spawned without a shell.
    Direct,
    /// Anything with whitespace or shell syntax, handed to `<shell> -lc`.
    Shell,
}

impl CommandForm {
    pub fn classify(command: &str) -> Self {
        let needs_shell = command.is_empty()
            || command
                .chars()
                .any(|c| c.is_whitespace() || SHELL_METACHARACTERS.contains(&c));
        if needs_shell {
            Self::Shell
        } else {
            Self::Direct
        }
    }
}

/// Build the child process for `command`, run from `dir` with inherited stdio.
pub(crate) fn build(command: &str, dir: &Path, shell: &str) -> Command {
    let mut child = match CommandForm::classify(command) {
        CommandForm::Direct => {
            // A bare name goes through PATH; anything with a separator is
            // relative to the package, not to the runner's directory.
            if command.contains('/') || command.contains(std::path::MAIN_SEPARATOR) {
                Command::new(dir.join(command))
            } else {
                Command::new(command)
            }
        }
        CommandForm::Shell => {
            let mut cmd = Command::new(shell);
            cmd.arg("-lc").arg(command);
            cmd
        }
    };
    child
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    child
}
