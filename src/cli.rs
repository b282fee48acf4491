use clap::Parser;
use log::info;
use statedesc_core::StateDescriptor;
use std::{io::Write, path::PathBuf};

/// Reads and validates the state descriptions in XML documents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paths of the XML documents to read
    #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
    files: Vec<PathBuf>,
    /// Skip invalid state descriptions instead of failing
    #[arg(short, long, default_value = "false")]
    lenient: bool,
    /// Print one JSON object per state description
    #[arg(long, default_value = "false")]
    json: bool,
}

impl Cli {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        for file in &self.files {
            let states = if self.lenient {
                statedesc_xml::load_lenient(file)?
            } else {
                statedesc_xml::load(file)?
            };
            info!("found {} state descriptions in '{}'", states.len(), file.display());
            for state in &states {
                self.print(out, state)?;
            }
        }
        Ok(())
    }

    fn print(&self, out: &mut impl Write, state: &StateDescriptor) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer(&mut *out, state)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{state:#?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from(["statedesc", "--lenient", "--json", "a.xml", "b.xml"])
            .expect("valid arguments");
        assert!(cli.lenient);
        assert!(cli.json);
        assert_eq!(cli.files, [PathBuf::from("a.xml"), PathBuf::from("b.xml")]);
    }

    #[test]
    fn no_files() {
        Cli::try_parse_from(["statedesc"]).expect_err("files are required");
    }
}
