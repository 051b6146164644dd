use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ftp-binding", about = "Runs one FTP binding operation.")]
pub struct Cli {
    /// Path to the binding configuration file
    #[arg(short, long)]
    pub config: String,

    /// Operation to run: create, list, get or delete
    pub operation: String,

    /// Request metadata as key=value, e.g. -m filename=reports/out.txt
    #[arg(short, long = "metadata", value_parser = parse_key_value)]
    pub metadata: Vec<(String, String)>,

    /// File whose content is the create payload
    #[arg(short, long, conflicts_with = "data")]
    pub input: Option<PathBuf>,

    /// Inline create payload
    #[arg(short, long)]
    pub data: Option<String>,

    /// Where to write the result instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))?;
    if key.is_empty() {
        return Err(format!("empty key in {:?}", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    pub fn metadata_map(&self) -> HashMap<String, String> {
        self.metadata.iter().cloned().collect()
    }

    pub fn payload(&self) -> Result<Vec<u8>> {
        if let Some(path) = &self.input {
            return std::fs::read(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()));
        }
        Ok(self
            .data
            .as_ref()
            .map(|d| d.as_bytes().to_vec())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_arguments() {
        let cli = Cli::try_parse_from([
            "ftp-binding",
            "-c",
            "binding.toml",
            "create",
            "-m",
            "filename=reports/out.txt",
            "-m",
            "directory=",
            "--data",
            "hello",
        ])
        .unwrap();

        assert_eq!(cli.operation, "create");
        let metadata = cli.metadata_map();
        assert_eq!(metadata["filename"], "reports/out.txt");
        assert_eq!(metadata["directory"], "");
        assert_eq!(cli.payload().unwrap(), b"hello");
    }

    #[test]
    fn test_metadata_requires_equals() {
        assert!(Cli::try_parse_from(["ftp-binding", "-c", "b.toml", "get", "-m", "filename"]).is_err());
    }

    #[test]
    fn test_input_conflicts_with_data() {
        assert!(Cli::try_parse_from([
            "ftp-binding",
            "-c",
            "b.toml",
            "create",
            "--input",
            "a.bin",
            "--data",
            "x",
        ])
        .is_err());
    }
}
