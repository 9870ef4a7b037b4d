use std::{
    collections::BTreeMap,
    io::{BufWriter, Write},
};

use fs_err as fs;
use glyphpack::WordPacker;
use indicatif::{ProgressBar, ProgressStyle};

use super::PackedWord;
use crate::options::{BatchOptions, GlobalOptions};

pub fn batch(global: GlobalOptions, options: BatchOptions) -> anyhow::Result<()> {
    let config = super::load_config(&global)?;
    let packer = WordPacker::new().max_grid(config.max_grid);

    let contents = fs::read_to_string(&options.input)?;
    let words = words_from(&contents);

    let progress = ProgressBar::new(words.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {wide_msg}"),
    );

    let mut report: BTreeMap<&str, Option<PackedWord>> = BTreeMap::new();

    for word in &words {
        progress.set_message(word.to_string());
        super::warn_unsupported(word);

        let packed = packer.pack(word).map(|grid| PackedWord::new(word, &grid));
        if packed.is_none() {
            log::warn!("No solution for {:?}", word);
        }

        report.insert(word, packed);
        progress.inc(1);
    }

    progress.finish_and_clear();

    let solved = report.values().filter(|packed| packed.is_some()).count();
    log::info!(
        "Packed {} of {} words ({} distinct searches)",
        solved,
        report.len(),
        packer.cached_words()
    );

    if let Some(parent) = options.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = BufWriter::new(fs::File::create(&options.output)?);
    serde_json::to_writer_pretty(&mut file, &report)?;
    file.flush()?;

    log::info!("Wrote report to {}", options.output.display());

    Ok(())
}

/// Splits a word list into trimmed, non-empty lines.
fn words_from(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn skips_blank_lines() {
        let words = words_from("cat\n\n  dog  \r\n\t\nAV\n");
        assert_eq!(words, vec!["cat", "dog", "AV"]);
    }
}
