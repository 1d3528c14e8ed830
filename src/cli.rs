use clap::{Args, Parser};
use std::path::PathBuf;

/// Arguments shared by both extractors
#[derive(Args, Debug)]
pub struct Target {
    /// Python source file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Log parsing progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "parse-classes",
    about = "Print the top-level class names of a Python file as a JSON array",
    version = env!("GIT_DESCRIBE"),
)]
pub struct ClassesCli {
    #[command(flatten)]
    pub target: Target,
}

#[derive(Parser, Debug)]
#[command(
    name = "parse-functions",
    about = "Print every function name in a Python file, at any depth, as a JSON array",
    version = env!("GIT_DESCRIBE"),
)]
pub struct FunctionsCli {
    #[command(flatten)]
    pub target: Target,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_classes_cli_definition() {
        ClassesCli::command().debug_assert();
    }

    #[test]
    fn test_functions_cli_definition() {
        FunctionsCli::command().debug_assert();
    }

    #[test]
    fn test_classes_cli_parses_file() {
        let cli = ClassesCli::try_parse_from(["parse-classes", "models.py"]).unwrap();
        assert_eq!(cli.target.file, PathBuf::from("models.py"));
        assert!(!cli.target.verbose);
    }

    #[test]
    fn test_functions_cli_verbose() {
        let cli = FunctionsCli::try_parse_from(["parse-functions", "-v", "app.py"]).unwrap();
        assert_eq!(cli.target.file, PathBuf::from("app.py"));
        assert!(cli.target.verbose);
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(ClassesCli::try_parse_from(["parse-classes"]).is_err());
        assert!(FunctionsCli::try_parse_from(["parse-functions"]).is_err());
    }

    #[test]
    fn test_cli_rejects_extra_files() {
        assert!(ClassesCli::try_parse_from(["parse-classes", "a.py", "b.py"]).is_err());
    }
}
