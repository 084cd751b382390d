//! Text rendering of the SQL statements written by both commands.
//!
//! The output is a portable script rather than a live connection, so values are
//! embedded as literals. Only single quotes are escaped; the input is trusted.

use crate::catalog::{CategoryRow, ProductRow};

pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

pub fn quote(value: &str) -> String {
    format!("'{}'", escape_literal(value))
}

pub fn insert_category(row: &CategoryRow) -> String {
    format!(
        "INSERT INTO categories (id, name, slug, url) VALUES ({}, {}, {}, {});",
        row.id,
        quote(&row.name),
        quote(&row.slug),
        quote(&row.url)
    )
}

pub fn insert_product(row: &ProductRow) -> String {
    format!(
        "INSERT INTO products (id, title, slug, anchor, category_id, category_name) VALUES ({}, {}, {}, {}, {}, {});",
        row.id,
        quote(&row.title),
        quote(&row.slug),
        quote(&row.anchor),
        row.category_id,
        quote(&row.category_name)
    )
}

pub fn update_product_image(id: usize, local_path: &str) -> String {
    format!("UPDATE products SET image_url = {} WHERE id = {};", quote(local_path), id)
}
