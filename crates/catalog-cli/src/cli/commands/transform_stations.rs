//! `transform-stations` – source records to catalog JSON plus tag list.

use anyhow::Result;
use catalog_core::stations;
use std::path::Path;

pub fn run_transform_stations(input: &Path, output: &Path, tags_output: &Path) -> Result<()> {
    let s = stations::run_transform(input, output, tags_output)?;
    println!("input={} total={}", s.input.display(), s.total);
    println!("output={}", s.output.display());
    println!(
        "tags_output={} unique_tags={}",
        s.tags_output.display(),
        s.unique_tags
    );
    Ok(())
}
