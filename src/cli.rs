use crate::args::*;
use crate::commands::*;
use std::fmt::Display;

pub fn run_command(command: &Commands) -> anyhow::Result<()> {
    use Commands::*;
    match command {
        Demo(args) => cmd_demo(args),
        Shot(args) => cmd_shot(args),
        Colors => cmd_colors(),
    }
}

/// A wrapper for [`anyhow::Error`] that prints it as Go errors.
///
/// So, instead of:
///
/// ```text
/// 💥 Error: read config file
///
/// Caused by:
///     No such file or directory (os error 2)
/// ```
///
/// It will print:
///
/// ```text
/// 💥 Error: read config file: No such file or directory (os error 2).
/// ```
pub struct Error(pub anyhow::Error);

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let error = &self.0;
        write!(f, "{error}")?;
        if let Some(cause) = error.source() {
            for error in anyhow::Chain::new(cause) {
                write!(f, ": {error}")?;
            }
        }
        write!(f, ".")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_chain() {
        let res: anyhow::Result<()> = Err(anyhow::anyhow!("radius must be positive"));
        let err = res.context("draw circle").unwrap_err();
        assert_eq!(Error(err).to_string(), "draw circle: radius must be positive.");
    }

    #[test]
    fn test_error_single() {
        let err = anyhow::anyhow!("empty region");
        assert_eq!(Error(err).to_string(), "empty region.");
    }
}
