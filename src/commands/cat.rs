use super::{Command, CommandError, CommandOutput};
use crate::profile::{Profile, Topic};

/// What a `cat` operand refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatTarget {
    /// Same content as the given registry command
    Alias(Command),
    Portfolio,
    Resume,
    ProfileImage,
}

impl CatTarget {
    /// Resolve a file name. Names are case-sensitive.
    pub fn resolve(file: Option<&str>, profile: &Profile) -> Result<Self, CommandError> {
        let file = file.ok_or(CommandError::MissingOperand)?;
        let target = match file {
            "about.md" => CatTarget::Alias(Command::About),
            "skills.txt" => CatTarget::Alias(Command::Skills),
            "projects.md" => CatTarget::Alias(Command::Projects),
            "contact.txt" => CatTarget::Alias(Command::Contact),
            "portfolio.md" => CatTarget::Portfolio,
            "profile.jpg" => CatTarget::ProfileImage,
            "resume.pdf" => CatTarget::Resume,
            name if name == profile.resume_file_name() => CatTarget::Resume,
            name => return Err(CommandError::UnknownFile(name.to_string())),
        };
        Ok(target)
    }

    pub fn output(&self, profile: &Profile) -> CommandOutput {
        match self {
            CatTarget::Alias(command) => command.execute(&[], profile),
            CatTarget::Portfolio => CommandOutput::Text(profile.text(Topic::ComposedDocument).into_owned()),
            CatTarget::Resume => CommandOutput::Download(profile.resume_path.clone()),
            CatTarget::ProfileImage => CommandOutput::ProfileImage,
        }
    }
}
