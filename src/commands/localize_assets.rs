use std::path::PathBuf;
use std::time::Duration;
use anyhow::Context;
use itertools::Itertools;
use prettytable::{Cell, Row, Table};

use crate::assets::fetcher::HttpFetcher;
use crate::assets::localizer::{AssetLocalizer, DownloadOutcome};
use crate::assets::url_list::{filter_urls, read_url_list};

pub fn localize_assets(input: PathBuf,
                       output: PathBuf,
                       images_directory: PathBuf,
                       filter: String,
                       timeout: Option<Duration>) -> anyhow::Result<()>
{
    log::info!("Reading image URLs from {}", input.display());
    log::info!("Writing images to {}", images_directory.display());

    let urls = read_url_list(&input)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let total = urls.len();
    let urls = filter_urls(urls, &filter);
    log::info!("Selected {} of {} URLs matching '{}'", urls.len(), total, filter);

    let localizer = AssetLocalizer::new(HttpFetcher::new(timeout)?, images_directory);
    let report = localizer.run(&urls)?;

    std::fs::write(&output, report.to_sql())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!(
        "Downloaded {} images and generated {}",
        report.downloaded_count(),
        output.display()
    );
    for asset in &report.assets {
        if let DownloadOutcome::Failed { error } = &asset.outcome {
            log::debug!("No image for product {} ({}): {}", asset.ordinal, asset.url, error);
        }
    }
    let missing = report.missing_ordinals();
    if !missing.is_empty() {
        log::warn!(
            "{} products will keep their old image_url (ids {})",
            missing.len(),
            missing.iter().join(", ")
        );
    }

    let mut table = Table::new();
    table.set_titles(Row::new(vec![Cell::new("Output"), Cell::new("Selected"), Cell::new("Downloaded"), Cell::new("Failed")]));
    table.add_row(Row::new(vec![
        Cell::new(output.display().to_string().as_str()),
        Cell::new(report.assets.len().to_string().as_str()),
        Cell::new(report.downloaded_count().to_string().as_str()),
        Cell::new(report.failed_count().to_string().as_str()),
    ]));
    table.printstd();
    Ok(())
}
