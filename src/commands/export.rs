use std::io::{BufWriter, Write};

use anyhow::bail;
use fs_err as fs;
use glyphpack::WordPacker;

use crate::{
    options::{ExportOptions, GlobalOptions},
    palette::HashedPalette,
    worksheet::Worksheet,
};

pub fn export(global: GlobalOptions, options: ExportOptions) -> anyhow::Result<()> {
    let config = super::load_config(&global)?;
    let packer = WordPacker::new().max_grid(config.max_grid);

    super::warn_unsupported(&options.word);

    let grid = match packer.pack(&options.word) {
        Some(grid) => grid,
        None => bail!(
            "No grid up to {0}x{0} fits the letters of {1:?}",
            config.max_grid,
            options.word
        ),
    };

    let mut palette = HashedPalette::new(config.render.palette_seed);
    let image = Worksheet::new(&options.word, &grid)
        .solved(options.solved)
        .render(&config.render, &mut palette)?;

    if let Some(parent) = options.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = BufWriter::new(fs::File::create(&options.output)?);
    image.encode_png(&mut file)?;
    file.flush()?;

    log::info!(
        "Wrote {}x{} worksheet to {}",
        image.size().0,
        image.size().1,
        options.output.display()
    );

    Ok(())
}
