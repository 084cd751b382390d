use std::path::PathBuf;
use anyhow::Context;
use prettytable::{Cell, Row, Table};

use crate::catalog::{Catalog, CatalogExport, ExportOptions};

pub fn export_catalog(input: PathBuf, output: PathBuf, options: ExportOptions) -> anyhow::Result<()> {
    log::info!("Reading catalog from {}", input.display());
    let catalog = Catalog::from_file(&input)?;
    log::info!(
        "Found {} categories with {} products",
        catalog.categories.len(),
        catalog.product_count()
    );

    // The whole script is rendered before the output file is created.
    let export = CatalogExport::build(&catalog, options);
    let source_name = input.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let script = export.to_sql(&source_name);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, script)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Generated SQL file: {}", output.display());
    log::info!("Categories: {}", export.categories.len());
    log::info!("Products: {}", export.products.len());

    let mut table = Table::new();
    table.set_titles(Row::new(vec![Cell::new("Output"), Cell::new("Categories"), Cell::new("Products"), Cell::new("Skipped")]));
    table.add_row(Row::new(vec![
        Cell::new(output.display().to_string().as_str()),
        Cell::new(export.categories.len().to_string().as_str()),
        Cell::new(export.products.len().to_string().as_str()),
        Cell::new(export.skipped_products.to_string().as_str()),
    ]));
    table.printstd();
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_script_next_to_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("product category.json");
        std::fs::write(&input, r##"{"categories":[{"name":"Tops","slug":"tops","url":"/tops","products":[{"name":"Tee","slug":"tee","anchor":"#tee"}]}]}"##).unwrap();
        let output = dir.path().join("sql").join("insert_categories_and_products.sql");

        export_catalog(input, output.clone(), ExportOptions::default()).unwrap();

        let script = std::fs::read_to_string(output).unwrap();
        assert!(script.starts_with("-- SQL Insert Script for Categories and Products\n-- Generated from product category.json\n"));
        assert!(script.contains("INSERT INTO categories (id, name, slug, url) VALUES (1, 'Tops', 'tops', '/tops');"));
        assert!(script.ends_with("VALUES (1, 'Tee', 'tee', '#tee', 1, 'Tops');"));
    }

    #[test]
    fn header_names_the_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("winter catalog.json");
        std::fs::write(&input, r#"{"categories":[]}"#).unwrap();
        let output = dir.path().join("out.sql");

        export_catalog(input, output.clone(), ExportOptions::default()).unwrap();

        let script = std::fs::read_to_string(output).unwrap();
        assert_eq!(script.lines().nth(1), Some("-- Generated from winter catalog.json"));
    }

    #[test]
    fn malformed_catalog_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("catalog.json");
        std::fs::write(&input, r#"{"categories":[{"name":"Tops","products":[]}]}"#).unwrap();
        let output = dir.path().join("out.sql");

        assert!(export_catalog(input, output.clone(), ExportOptions::default()).is_err());
        assert!(!output.exists());
    }
}
