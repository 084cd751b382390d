//! Downloads filtered image URLs to numbered local files.
//!
//! The ordinal of each URL in the filtered list is also the `products.id` its
//! update targets. This only holds if the `products` table was populated in the
//! same order as the URL list; nothing here can check that. A failed download
//! still consumes its ordinal, so that row gets no update.

use std::path::{Path, PathBuf};
use anyhow::Context;

use crate::assets::fetcher::Fetcher;
use crate::sql;

pub const LOCAL_PATH_PREFIX: &str = "/images";

pub fn local_filename(ordinal: usize) -> String {
    format!("product_{}.jpg", ordinal)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded,
    Failed { error: String }
}

#[derive(Debug, Clone)]
pub struct LocalizedAsset {
    pub ordinal: usize,
    pub url: String,
    pub filename: String,
    pub outcome: DownloadOutcome
}

impl LocalizedAsset {
    pub fn local_path(&self) -> String {
        format!("{}/{}", LOCAL_PATH_PREFIX, self.filename)
    }

    pub fn is_downloaded(&self) -> bool {
        self.outcome == DownloadOutcome::Downloaded
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocalizationReport {
    pub assets: Vec<LocalizedAsset>
}

impl LocalizationReport {
    pub fn downloaded_count(&self) -> usize {
        self.assets.iter().filter(|asset| asset.is_downloaded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.assets.len() - self.downloaded_count()
    }

    /// Ordinals (and therefore product ids) that will not receive an update.
    pub fn missing_ordinals(&self) -> Vec<usize> {
        self.assets.iter()
            .filter(|asset| !asset.is_downloaded())
            .map(|asset| asset.ordinal)
            .collect()
    }

    pub fn to_sql(&self) -> String {
        let mut out = String::from("-- Update image URLs to local paths\n");
        for asset in self.assets.iter().filter(|asset| asset.is_downloaded()) {
            out.push_str(&sql::update_product_image(asset.ordinal, &asset.local_path()));
            out.push('\n');
        }
        out
    }
}

pub struct AssetLocalizer<F: Fetcher> {
    fetcher: F,
    images_directory: PathBuf
}

impl<F: Fetcher> AssetLocalizer<F> {
    pub fn new(fetcher: F, images_directory: impl Into<PathBuf>) -> Self {
        Self { fetcher, images_directory: images_directory.into() }
    }

    /// Download every URL in order. Only failing to create the image directory
    /// aborts; individual download failures are recorded in the report.
    pub fn run(&self, urls: &[String]) -> anyhow::Result<LocalizationReport> {
        std::fs::create_dir_all(&self.images_directory)
            .with_context(|| format!(
                "Failed to create image directory {}", self.images_directory.display()
            ))?;

        let mut report = LocalizationReport { assets: Vec::with_capacity(urls.len()) };
        for (ordinal, url) in (1..).zip(urls) {
            let filename = local_filename(ordinal);
            let target = self.images_directory.join(&filename);
            let outcome = match self.download(url, &target) {
                Ok(()) => {
                    log::info!("Downloaded {} from {}", filename, url);
                    DownloadOutcome::Downloaded
                }
                Err(e) => {
                    log::error!("Failed to download {}: {:#}", url, e);
                    DownloadOutcome::Failed { error: format!("{:#}", e) }
                }
            };
            report.assets.push(LocalizedAsset {
                ordinal,
                url: url.clone(),
                filename,
                outcome
            });
        }
        Ok(report)
    }

    fn download(&self, url: &str, target: &Path) -> anyhow::Result<()> {
        let data = self.fetcher.fetch(url)?;
        std::fs::write(target, data)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        Ok(())
    }
}
