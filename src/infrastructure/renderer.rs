// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Writes rendered pages to a temporary directory and opens them in the
/// system browser.
#[derive(Debug, Default)]
pub struct PagePreview {
    // Keep last temp dir alive to prevent deletion
    temp_dir: Option<TempDir>,
}

impl PagePreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_temp_file(&mut self, html: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("ainotes-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("page.html");

        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(html.as_bytes())
            .context("Failed to write page to temporary file")?;

        debug!(path = %file_path.display(), "Wrote preview page");
        self.temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        wait_for_launch().await;

        Ok(())
    }
}

/// The browser reads the file after spawn returns; yields to the runtime
/// meanwhile.
async fn wait_for_launch() {
    tokio::time::sleep(Duration::from_millis(BROWSER_LAUNCH_DELAY_MS)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_html_when_creating_temp_file_then_file_contains_page() {
        let mut preview = PagePreview::new();

        let path = preview.create_temp_file("<h1>Notes</h1>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<h1>Notes</h1>");
        assert!(path.ends_with("page.html"));
    }

    #[tokio::test]
    async fn given_launch_delay_when_waiting_then_runtime_is_not_blocked() {
        // Act
        let waited = tokio::time::timeout(Duration::from_millis(1), wait_for_launch()).await;

        // Assert
        assert!(waited.is_err());
    }

    #[test]
    fn given_second_page_when_creating_temp_file_then_previous_directory_released() {
        let mut preview = PagePreview::new();
        let first = preview.create_temp_file("one").unwrap();

        let second = preview.create_temp_file("two").unwrap();

        assert!(!first.exists());
        assert!(second.exists());
    }
}
