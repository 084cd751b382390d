//! Catalog document model and its flattening into relational rows.
//!
//! Identifiers are surrogate keys assigned at export time; the source document
//! carries none. Categories are numbered first, in one complete pass, so every
//! product can reference an id that already exists.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use anyhow::Context;

use crate::sql;
use crate::utils::slug::{generate_slug, is_blank};

///////////////////////////////////////////////////////////////////////////////////////////////////
///////////////////////////////////////////////////////////////////////////////////////////////////
// Source Document
///////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Catalog {
    pub categories: Vec<CategoryEntry>
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub products: Vec<ProductEntry>
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub slug: String,
    pub anchor: String
}

impl Catalog {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open catalog {}", path.display()))?;
        let reader = std::io::BufReader::new(file);
        Self::from_reader(reader)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))
    }

    pub fn from_reader(reader: impl Read) -> anyhow::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|category| category.products.len()).sum()
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///////////////////////////////////////////////////////////////////////////////////////////////////
// Export
///////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub derive_missing_slugs: bool,
    pub skip_duplicate_products: bool
}

impl ExportOptions {
    fn resolve_slug(&self, slug: &str, name: &str) -> String {
        if self.derive_missing_slugs && is_blank(slug) {
            let derived = generate_slug(name);
            log::debug!("Derived slug '{}' for '{}'", derived, name);
            derived
        } else {
            slug.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: usize,
    pub name: String,
    pub slug: String,
    pub url: String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: usize,
    pub title: String,
    pub slug: String,
    pub anchor: String,
    pub category_id: usize,
    pub category_name: String
}

#[derive(Debug, Clone)]
pub struct CatalogExport {
    pub categories: Vec<CategoryRow>,
    pub products: Vec<ProductRow>,
    pub skipped_products: usize
}

impl CatalogExport {
    pub fn build(catalog: &Catalog, options: ExportOptions) -> Self {
        let mut category_ids: HashMap<&str, usize> = HashMap::new();
        let mut categories = Vec::with_capacity(catalog.categories.len());
        let mut category_counter = 1;
        for category in &catalog.categories {
            if let Some(previous) = category_ids.insert(category.name.as_str(), category_counter) {
                log::warn!(
                    "Category name '{}' is used by ids {} and {}; products keep their own parent",
                    category.name, previous, category_counter
                );
            }
            categories.push(CategoryRow {
                id: category_counter,
                name: category.name.clone(),
                slug: options.resolve_slug(&category.slug, &category.name),
                url: category.url.clone()
            });
            category_counter += 1;
        }

        // Parents are resolved by position: the name map is ambiguous when names repeat.
        let mut products = Vec::with_capacity(catalog.product_count());
        let mut skipped_products = 0;
        let mut product_counter = 1;
        for (category, parent) in catalog.categories.iter().zip(&categories) {
            let mut seen_slugs = HashSet::new();
            for product in &category.products {
                let slug = options.resolve_slug(&product.slug, &product.name);
                if options.skip_duplicate_products && !seen_slugs.insert(slug.clone()) {
                    log::warn!(
                        "Skipping product '{}': slug '{}' already used in category '{}'",
                        product.name, slug, category.name
                    );
                    skipped_products += 1;
                    continue;
                }
                products.push(ProductRow {
                    id: product_counter,
                    title: product.name.clone(),
                    slug,
                    anchor: product.anchor.clone(),
                    category_id: parent.id,
                    category_name: category.name.clone()
                });
                product_counter += 1;
            }
        }

        log::debug!(
            "Assigned {} category ids and {} product ids ({} skipped)",
            categories.len(), products.len(), skipped_products
        );
        Self { categories, products, skipped_products }
    }

    /// Render the full insert script. `source_name` is quoted in the header comment.
    pub fn to_sql(&self, source_name: &str) -> String {
        let mut lines = Vec::with_capacity(self.categories.len() + self.products.len() + 8);
        lines.push("-- SQL Insert Script for Categories and Products".to_string());
        lines.push(format!("-- Generated from {}", source_name));
        lines.push(String::new());
        lines.push("-- Insert Categories".to_string());
        lines.push(String::new());
        lines.extend(self.categories.iter().map(sql::insert_category));
        lines.push(String::new());
        lines.push("-- Insert Products".to_string());
        lines.push(String::new());
        lines.extend(self.products.iter().map(sql::insert_product));
        lines.join("\n")
    }
}
