pub(crate) mod export_catalog;
pub(crate) mod localize_assets;
