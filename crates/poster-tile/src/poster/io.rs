//! Input and output for poster jobs

use crate::layout::LayoutPlan;
use crate::options::RunConfig;
use crate::source::{ContentSource, MemorySource};
use crate::types::*;
use log::debug;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Read the input document into memory; `-` reads standard input
pub async fn load_source(path: impl AsRef<Path>) -> Result<MemorySource> {
    let path = path.as_ref();
    if path == Path::new("-") {
        let mut data = Vec::new();
        tokio::io::stdin().read_to_end(&mut data).await?;
        return Ok(MemorySource::new("stdin", data));
    }

    let data = tokio::fs::read(path).await?;
    let source = MemorySource::new(path.display().to_string(), data);
    debug!("Read {} bytes from {}", source.data().len(), source.name());
    Ok(source)
}

/// Produce the poster document in memory
pub async fn tile_poster(source: MemorySource, config: &RunConfig) -> Result<(LayoutPlan, Vec<u8>)> {
    let config = config.clone();

    tokio::task::spawn_blocking(move || {
        let mut out = Vec::new();
        let plan = super::make_poster(&source, &config, &mut out)?;
        Ok::<_, TileError>((plan, out))
    })
    .await?
}

/// Write the poster document to a file, or to standard output
pub async fn save_output(bytes: &[u8], path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => tokio::fs::write(path, bytes).await?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(bytes).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
