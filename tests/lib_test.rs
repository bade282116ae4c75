//! Library integration tests.

use lsishow::LsiError;

#[test]
fn error_types_are_public() {
    let err = LsiError::ToolUnavailable {
        tool: "storcli64".into(),
    };
    assert!(err.to_string().contains("storcli64"));
    assert!(matches!(err, LsiError::ToolUnavailable { .. }));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> lsishow::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use lsishow::cli::{Cli, Commands};

    let cli = Cli::parse_from(["lsishow", "completions", "bash"]);
    assert!(matches!(cli.command, Some(Commands::Completions(_))));

    let cli = Cli::parse_from(["lsishow", "--json"]);
    assert!(cli.command.is_none());
    assert!(cli.json);
}

#[test]
fn parsers_are_public() {
    use lsishow::parse::pci::pcie_generation;
    use lsishow::parse::storcli::clean_model;

    assert_eq!(pcie_generation("16.0"), Some("4.0"));
    assert_eq!(clean_model("T2000DM008-2FR102"), "ST2000DM008-2FR102");
}
