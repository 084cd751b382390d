pub(crate) mod slug;
pub(crate) mod encoding;
