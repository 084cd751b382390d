pub(crate) mod url_list;
pub(crate) mod fetcher;
pub(crate) mod localizer;

pub const DEFAULT_SIZE_FILTER: &str = "250x250";
