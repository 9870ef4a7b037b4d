use std::{path::PathBuf, str::FromStr};

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs the letters of a word into the smallest grid that holds them")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// The lettergrid.toml file to use, or a folder containing one. Defaults
    /// to the current directory; a missing file there means default settings.
    #[structopt(long)]
    pub config: Option<PathBuf>,

    /// The largest width or height, in cells, that the packer may use.
    /// Overrides the config file.
    #[structopt(long)]
    pub max_grid: Option<u32>,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack a word and print the resulting grid to stdout.
    Pack(PackOptions),

    /// Pack a word and write a PNG worksheet showing each letter's shape next
    /// to the grid they fit into.
    Export(ExportOptions),

    /// Pack every word in a file, one per line, and write the results as JSON.
    Batch(BatchOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The word to pack. Characters without a letter shape are ignored.
    pub word: String,

    /// How to print the result.
    ///
    /// Options:
    ///
    /// - text: One line per grid row, '.' for empty cells
    ///
    /// - json: A JSON object, or null if there is no solution
    #[structopt(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, StructOpt)]
pub struct ExportOptions {
    /// The word to pack.
    pub word: String,

    /// The path to write the PNG image to.
    #[structopt(long, short)]
    pub output: PathBuf,

    /// Fill in the grid with the packed letters instead of leaving it blank.
    #[structopt(long)]
    pub solved: bool,
}

#[derive(Debug, StructOpt)]
pub struct BatchOptions {
    /// A text file with one word per line. Blank lines are skipped.
    pub input: PathBuf,

    /// The path to write the JSON report to.
    #[structopt(long, short)]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<OutputFormat, Self::Err> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),

            _ => Err(String::from(
                "Invalid output format. Valid options are 'text' and 'json'.",
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_pack() {
        let args = &[
            "lettergrid",
            "--max-grid",
            "8",
            "pack",
            "cat",
            "--format",
            "json",
        ];
        let options = Options::from_iter_safe(args).unwrap();

        assert_eq!(options.global.max_grid, Some(8));
        match options.command {
            Subcommand::Pack(pack) => {
                assert_eq!(pack.word, "cat");
                assert_eq!(pack.format, OutputFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parse_export() {
        let options =
            Options::from_iter_safe(&["lettergrid", "export", "hi", "-o", "hi.png", "--solved"])
                .unwrap();

        match options.command {
            Subcommand::Export(export) => {
                assert_eq!(export.output, PathBuf::from("hi.png"));
                assert!(export.solved);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_format() {
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert!(
            Options::from_iter_safe(&["lettergrid", "pack", "cat", "--format", "yaml"]).is_err()
        );
    }
}
