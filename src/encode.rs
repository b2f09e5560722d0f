pub(crate) mod pack;
pub(crate) mod sink;
