use std::io::{self, Write};

use glyphpack::{Grid, WordPacker};
use serde::Serialize;

use crate::options::{GlobalOptions, OutputFormat, PackOptions};

/// A packed word as written to JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackedWord {
    pub word: String,
    pub width: usize,
    pub height: usize,
    pub area: usize,
    pub filled: usize,

    /// One array per row; each cell is a letter or null when empty.
    pub grid: Vec<Vec<Option<char>>>,
}

impl PackedWord {
    pub fn new(word: &str, grid: &Grid) -> Self {
        Self {
            word: word.to_owned(),
            width: grid.width(),
            height: grid.height(),
            area: grid.area(),
            filled: grid.filled_cells(),
            grid: grid.to_rows(),
        }
    }
}

pub fn pack(global: GlobalOptions, options: PackOptions) -> anyhow::Result<()> {
    let config = super::load_config(&global)?;
    let packer = WordPacker::new().max_grid(config.max_grid);

    super::warn_unsupported(&options.word);

    let result = packer.pack(&options.word);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match options.format {
        OutputFormat::Text => match &result {
            Some(grid) => {
                writeln!(output, "{}", grid)?;
                writeln!(
                    output,
                    "{} × {} (area: {})",
                    grid.width(),
                    grid.height(),
                    grid.area()
                )?;
            }
            None => writeln!(output, "No solution found.")?,
        },
        OutputFormat::Json => {
            let packed = result
                .as_ref()
                .map(|grid| PackedWord::new(&options.word, grid));

            serde_json::to_writer_pretty(&mut output, &packed)?;
            writeln!(output)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use glyphpack::pack_word;

    #[test]
    fn json_shape() {
        let grid = pack_word("A", 20).unwrap().into_grid();
        let packed = PackedWord::new("a", &grid);

        let value = serde_json::to_value(&packed).unwrap();

        assert_eq!(value["word"], "a");
        assert_eq!(value["width"], 3);
        assert_eq!(value["height"], 4);
        assert_eq!(value["area"], 12);
        assert_eq!(value["filled"], 10);
        assert_eq!(value["grid"][1], serde_json::json!(["A", null, "A"]));
    }

    #[test]
    fn no_solution_is_null() {
        let packed: Option<PackedWord> = None;
        assert_eq!(serde_json::to_string(&packed).unwrap(), "null");
    }
}
