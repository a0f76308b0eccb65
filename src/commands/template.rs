use crate::OutputFormat;
use crate::error::EnvarsError;

/// Template method trait for envars commands
pub trait CommandTemplate {
    /// Input arguments type for this command
    type Args;
    /// Output result type for this command
    type Output;

    fn validate_args(&self, _args: &Self::Args) -> Result<(), EnvarsError> {
        Ok(())
    }

    fn execute_operation(&self, args: Self::Args) -> Result<Self::Output, EnvarsError>;

    fn format_output(&self, output: Self::Output, _format: &OutputFormat) -> Result<(), EnvarsError>
    where
        Self::Output: std::fmt::Debug,
    {
        println!("{:?}", output);
        Ok(())
    }

    fn execute(&self, format: &OutputFormat, args: Self::Args) -> Result<(), EnvarsError>
    where
        Self::Output: std::fmt::Debug,
    {
        self.validate_args(&args)?;
        let output = self.execute_operation(args)?;
        self.format_output(output, format)
    }
}
