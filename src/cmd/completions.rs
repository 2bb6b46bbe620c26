//! Completions command implementation
//!
//! Handles the `qdoc completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// qdoc completions bash > /etc/bash_completion.d/qdoc
///
/// # Zsh
/// qdoc completions zsh > ~/.zfunc/_qdoc
///
/// # Fish
/// qdoc completions fish > ~/.config/fish/completions/qdoc.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
