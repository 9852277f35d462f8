//! Interactive command shell
//!
//! Parses one line at a time into a verb plus arguments and drives the
//! [`Navigator`]. Every error path is reported inline and leaves the loop
//! running; only `exit` (or end of input) stops the session.

use std::io::{self, BufRead, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::format::{format_entry, format_size};
use crate::navigator::Navigator;
use crate::tree::{NodeId, Tree};

const BANNER: &str = "\
╔══════════════════════════════════════════════════════════════╗
║              Directory Size Calculator Application           ║
║                                                              ║
║  A file system simulator with cd, ls, and size commands      ║
╚══════════════════════════════════════════════════════════════╝";

const HELP: &str = "\
Available Commands:
  cd <directory>  - Change to specified directory
  ls              - List contents of current directory
  size            - Show total size of current directory
  tree            - Show the subtree under the current directory
  help            - Show this help message
  exit            - Exit the application";

/// What the loop should do after dispatching a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Command dispatcher bound to one navigator and one output stream.
pub struct Shell {
    nav: Navigator,
    stdout: StandardStream,
}

impl Shell {
    pub fn new(nav: Navigator, use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            nav,
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// Run the interactive loop until `exit` or end of input.
    ///
    /// An interrupted read is a notice, not a shutdown; any other read
    /// failure ends the session the same way `exit` does.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.stdout, "{}", BANNER)?;
        writeln!(self.stdout, "Type 'help' for available commands.")?;
        writeln!(self.stdout)?;

        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            write!(self.stdout, "{}> ", self.nav.path())?;
            self.stdout.flush()?;

            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => {
                    // End of input behaves like `exit`.
                    writeln!(self.stdout)?;
                    writeln!(self.stdout, "Goodbye!")?;
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    writeln!(self.stdout)?;
                    writeln!(self.stdout, "Use 'exit' to quit.")?;
                    continue;
                }
                Err(e) => return Err(e),
            }

            if self.dispatch(&line)? == Outcome::Exit {
                writeln!(self.stdout, "Goodbye!")?;
                return Ok(());
            }
        }
    }

    /// Dispatch a single input line. Empty lines are no-ops; the verb is
    /// matched case-insensitively.
    pub fn dispatch(&mut self, line: &str) -> io::Result<Outcome> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(Outcome::Continue);
        };

        match verb.to_lowercase().as_str() {
            "cd" => {
                // `cd` with no target is silently ignored.
                if let Some(target) = parts.next() {
                    self.cmd_cd(target)?;
                }
            }
            "ls" => self.cmd_ls()?,
            "size" => self.cmd_size()?,
            "tree" => self.cmd_tree()?,
            "help" => writeln!(self.stdout, "{}", HELP)?,
            "exit" => return Ok(Outcome::Exit),
            other => {
                writeln!(self.stdout, "Unknown command: {}", other)?;
                writeln!(self.stdout, "Type 'help' for available commands.")?;
            }
        }

        Ok(Outcome::Continue)
    }

    fn cmd_cd(&mut self, target: &str) -> io::Result<()> {
        if let Err(e) = self.nav.change_directory(target) {
            writeln!(self.stdout, "cd: {}", e)?;
        }
        Ok(())
    }

    fn cmd_ls(&mut self) -> io::Result<()> {
        for entry in self.nav.entries() {
            if entry.size.is_none() {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                writeln!(self.stdout, "{}", entry.name)?;
                self.stdout.reset()?;
            } else {
                writeln!(self.stdout, "{}", format_entry(&entry.name, entry.size))?;
            }
        }
        Ok(())
    }

    fn cmd_size(&mut self) -> io::Result<()> {
        writeln!(self.stdout, "{}", format_size(self.nav.current_size()))
    }

    fn cmd_tree(&mut self) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(self.stdout, "{}", self.nav.path())?;
        self.stdout.reset()?;

        let mut counts = (0, 0);
        write_subtree(
            &mut self.stdout,
            self.nav.tree(),
            self.nav.current(),
            "",
            &mut counts,
        )?;

        writeln!(self.stdout)?;
        writeln!(self.stdout, "{} directories, {} files", counts.0, counts.1)
    }
}

/// Render the children of `dir` with box-drawing connectors, counting
/// directories and files along the way.
fn write_subtree(
    stdout: &mut StandardStream,
    tree: &Tree,
    dir: NodeId,
    prefix: &str,
    counts: &mut (usize, usize),
) -> io::Result<()> {
    let children = tree.list(dir);
    let last = children.len().saturating_sub(1);

    for (i, (name, id)) in children.into_iter().enumerate() {
        let connector = if i == last { "└── " } else { "├── " };
        write!(stdout, "{}{}", prefix, connector)?;

        if tree.is_dir(id) {
            counts.0 += 1;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            writeln!(stdout, "{}", name)?;
            stdout.reset()?;

            let child_prefix = if i == last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            write_subtree(stdout, tree, id, &child_prefix, counts)?;
        } else {
            counts.1 += 1;
            write!(stdout, "{}", name)?;
            if let Some(bytes) = tree.file_size(id) {
                write!(stdout, "  ")?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(stdout, "[{}]", format_size(bytes))?;
                stdout.reset()?;
            }
            writeln!(stdout)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(Navigator::sample(), false)
    }

    #[test]
    fn test_exit_stops() {
        let mut sh = shell();
        assert_eq!(sh.dispatch("exit").unwrap(), Outcome::Exit);
    }

    #[test]
    fn test_verb_is_case_insensitive() {
        let mut sh = shell();
        assert_eq!(sh.dispatch("EXIT").unwrap(), Outcome::Exit);
        assert_eq!(sh.dispatch("Ls").unwrap(), Outcome::Continue);
    }

    #[test]
    fn test_empty_line_is_noop() {
        let mut sh = shell();
        assert_eq!(sh.dispatch("").unwrap(), Outcome::Continue);
        assert_eq!(sh.dispatch("   \n").unwrap(), Outcome::Continue);
        assert_eq!(sh.navigator().path(), "/");
    }

    #[test]
    fn test_cd_moves_cursor() {
        let mut sh = shell();
        sh.dispatch("cd documents").unwrap();
        assert_eq!(sh.navigator().path(), "/documents");
    }

    #[test]
    fn test_cd_without_argument_is_ignored() {
        let mut sh = shell();
        sh.dispatch("cd").unwrap();
        assert_eq!(sh.navigator().path(), "/");
    }

    #[test]
    fn test_failed_cd_keeps_position() {
        let mut sh = shell();
        assert_eq!(sh.dispatch("cd nonexistent").unwrap(), Outcome::Continue);
        assert_eq!(sh.navigator().path(), "/");
    }

    #[test]
    fn test_unknown_command_continues() {
        let mut sh = shell();
        assert_eq!(sh.dispatch("frobnicate").unwrap(), Outcome::Continue);
    }

    #[test]
    fn test_extra_tokens_after_verb_are_ignored() {
        let mut sh = shell();
        sh.dispatch("cd documents extra words").unwrap();
        assert_eq!(sh.navigator().path(), "/documents");
    }
}
