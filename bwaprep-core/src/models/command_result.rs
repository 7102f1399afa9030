use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// A shell command ready to be handed to a shell or a scheduler, together with
/// the path the command is expected to produce.
///
/// For the aligner builders `output_path` is the file written via `-f`; for the
/// split builders it is the chunk prefix.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub command: String,
    pub output_path: String,
}

impl CommandResult {
    pub fn new(command: String, output_path: String) -> Self {
        CommandResult {
            command,
            output_path,
        }
    }
}

impl Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_display_is_the_command() {
        let result = CommandResult::new(
            "bwa aln -t 4 -f a.sai ref a.fq".to_string(),
            "a.sai".to_string(),
        );
        assert_eq!(result.to_string(), "bwa aln -t 4 -f a.sai ref a.fq");
    }
}
