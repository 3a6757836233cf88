use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io::Write;

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

impl From<CompletionShell> for clap_complete::Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => clap_complete::Shell::Bash,
            CompletionShell::Zsh => clap_complete::Shell::Zsh,
            CompletionShell::Fish => clap_complete::Shell::Fish,
            CompletionShell::PowerShell => clap_complete::Shell::PowerShell,
            CompletionShell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

/// Writes the completion script for the `rolodex` command tree to `out`.
pub fn emit(args: CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    let shell: clap_complete::Shell = args.shell.into();
    generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{emit, CompletionShell, CompletionsArgs};

    #[test]
    fn bash_script_lists_subcommands() {
        let mut out = Vec::new();
        emit(
            CompletionsArgs {
                shell: CompletionShell::Bash,
            },
            &mut out,
        )
        .unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("rolodex"));
        assert!(script.contains("add-birthday"));
        assert!(script.contains("remove-phone"));
    }
}
