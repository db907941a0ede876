mod cat;

pub use cat::CatTarget;

use crate::profile::{Profile, Topic};
use chrono::Local;
use thiserror::Error;

pub const HELP_TEXT: &str = "Available commands:
  whoami          - Display owner information
  about           - Learn more about me
  skills          - List my technical skills
  projects        - View featured projects
  profile         - Show my profile image
  contact         - Get contact information
  resume          - Download My Resume
  clear           - Clear the terminal
  ls              - List available sections
  cat <file>      - Read file contents
  echo <text>     - Echo text
  pwd             - Print working directory
  date            - Show current date/time";

pub const LISTING: &str = "about/
projects/
skills/
contact/
profile.jpg
resume.pdf
portfolio.md";

pub const WORKING_DIR: &str = "/home/portfolio";

/// Commands known to the registry. `cat` is resolved by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Whoami,
    About,
    Skills,
    Projects,
    Contact,
    Profile,
    Ls,
    Pwd,
    Date,
    Resume,
    Clear,
    Echo,
}

/// What running a registry command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Text(String),
    /// Wipe the scrollback
    Clear,
    /// Render the profile image as art
    ProfileImage,
    /// Offer the resource at this path for download
    Download(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    UnknownCommand(String),
    #[error("cat: {0}: No such file or directory")]
    UnknownFile(String),
    #[error("cat: missing file operand")]
    MissingOperand,
}

impl Command {
    pub const ALL: [Command; 13] = [
        Command::Help,
        Command::Whoami,
        Command::About,
        Command::Skills,
        Command::Projects,
        Command::Contact,
        Command::Profile,
        Command::Ls,
        Command::Pwd,
        Command::Date,
        Command::Resume,
        Command::Clear,
        Command::Echo,
    ];

    /// Look up a command by name. Matching ignores case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Whoami => "whoami",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Contact => "contact",
            Command::Profile => "profile",
            Command::Ls => "ls",
            Command::Pwd => "pwd",
            Command::Date => "date",
            Command::Resume => "resume",
            Command::Clear => "clear",
            Command::Echo => "echo",
        }
    }

    pub fn execute(&self, args: &[String], profile: &Profile) -> CommandOutput {
        match self {
            Command::Help => CommandOutput::Text(HELP_TEXT.to_string()),
            Command::Whoami => CommandOutput::Text(profile.text(Topic::Identity).into_owned()),
            Command::About => CommandOutput::Text(profile.text(Topic::About).into_owned()),
            Command::Skills => CommandOutput::Text(profile.text(Topic::Skills).into_owned()),
            Command::Projects => CommandOutput::Text(profile.text(Topic::Projects).into_owned()),
            Command::Contact => CommandOutput::Text(profile.text(Topic::Contact).into_owned()),
            Command::Profile => CommandOutput::ProfileImage,
            Command::Ls => CommandOutput::Text(LISTING.to_string()),
            Command::Pwd => CommandOutput::Text(WORKING_DIR.to_string()),
            Command::Date => {
                CommandOutput::Text(Local::now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string())
            }
            Command::Resume => CommandOutput::Download(profile.resume_path.clone()),
            Command::Clear => CommandOutput::Clear,
            Command::Echo => CommandOutput::Text(args.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, args: &[&str]) -> CommandOutput {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Command::from_name(name)
            .expect("known command")
            .execute(&args, &Profile::default())
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(Command::from_name("HELP"), Some(Command::Help));
        assert_eq!(Command::from_name("  WhoAmI "), Some(Command::Whoami));
        assert_eq!(Command::from_name("cat"), None);
        assert_eq!(Command::from_name("nosuchcommand"), None);
    }

    #[test]
    fn test_every_command_round_trips_its_name() {
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn test_help_lists_every_command() {
        for command in Command::ALL.iter().filter(|c| **c != Command::Help) {
            assert!(HELP_TEXT.contains(command.name()), "{} missing", command.name());
        }
        assert!(HELP_TEXT.contains("cat <file>"));
    }

    #[test]
    fn test_static_outputs() {
        assert_eq!(run("pwd", &[]), CommandOutput::Text("/home/portfolio".to_string()));
        assert_eq!(run("ls", &[]), CommandOutput::Text(LISTING.to_string()));
        assert_eq!(run("skills", &[]), CommandOutput::Text(crate::profile::SKILLS.to_string()));
        assert_eq!(run("whoami", &[]), CommandOutput::Text(crate::profile::WHOAMI.to_string()));
    }

    #[test]
    fn test_echo_joins_args() {
        assert_eq!(run("echo", &["a", "b", "c"]), CommandOutput::Text("a b c".to_string()));
        assert_eq!(run("echo", &[]), CommandOutput::Text(String::new()));
    }

    #[test]
    fn test_sentinel_outputs() {
        assert_eq!(run("clear", &[]), CommandOutput::Clear);
        assert_eq!(run("profile", &[]), CommandOutput::ProfileImage);
        assert_eq!(
            run("resume", &[]),
            CommandOutput::Download(crate::profile::RESUME_PATH.to_string())
        );
    }

    #[test]
    fn test_date_is_not_empty() {
        match run("date", &[]) {
            CommandOutput::Text(text) => assert!(text.contains("GMT")),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommandError::UnknownCommand("nosuchcommand".to_string()).to_string(),
            "Command not found: nosuchcommand"
        );
        assert_eq!(
            CommandError::UnknownFile("unknownfile.txt".to_string()).to_string(),
            "cat: unknownfile.txt: No such file or directory"
        );
    }
}
