// Identifier case conversion

use super::Command;
use crate::error::CliResult;
use gsl_generation::CaseStyle;

/// Convert an identifier to another case style
pub struct CaseCommand {
    pub ident: String,
    pub style: String,
}

impl CaseCommand {
    pub fn new(ident: String, style: String) -> Self {
        Self { ident, style }
    }

    /// Converted identifier
    pub fn convert(&self) -> CliResult<String> {
        let style: CaseStyle = self.style.parse()?;
        Ok(style.apply(&self.ident))
    }
}

impl Command for CaseCommand {
    fn execute(&self) -> CliResult<()> {
        println!("{}", self.convert()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_convert() {
        let cmd = CaseCommand::new("method_bar".to_string(), "pascal".to_string());
        assert_eq!(cmd.convert().unwrap(), "MethodBar");

        let cmd = CaseCommand::new("method_bar".to_string(), "Constant".to_string());
        assert_eq!(cmd.convert().unwrap(), "METHOD_BAR");
    }

    #[test]
    fn test_unknown_style() {
        let cmd = CaseCommand::new("x".to_string(), "sponge".to_string());
        assert!(matches!(cmd.convert(), Err(CliError::Generation(_))));
    }
}
