use crate::core::{ConfigProvider, OutputSurface, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Output path that selects stdout instead of a file.
pub const STDOUT_MARKER: &str = "-";

/// Writes the displayed text into a file, replacing previous content.
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
    name: String,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSurface for FileSurface {
    fn name(&self) -> &str {
        &self.name
    }

    async fn set_text(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, text).await?;
        tracing::debug!("Output written to {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StdoutSurface;

impl OutputSurface for StdoutSurface {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn set_text(&self, text: &str) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// Surface picked from configuration: `-` means stdout, anything else a file.
#[derive(Debug, Clone)]
pub enum ConfiguredSurface {
    File(FileSurface),
    Stdout(StdoutSurface),
}

impl ConfiguredSurface {
    pub fn from_path(path: &str) -> Self {
        if path == STDOUT_MARKER {
            ConfiguredSurface::Stdout(StdoutSurface)
        } else {
            ConfiguredSurface::File(FileSurface::new(path))
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::from_path(config.output_path())
    }
}

impl OutputSurface for ConfiguredSurface {
    fn name(&self) -> &str {
        match self {
            ConfiguredSurface::File(s) => s.name(),
            ConfiguredSurface::Stdout(s) => s.name(),
        }
    }

    async fn set_text(&self, text: &str) -> Result<()> {
        match self {
            ConfiguredSurface::File(s) => s.set_text(text).await,
            ConfiguredSurface::Stdout(s) => s.set_text(text).await,
        }
    }
}
