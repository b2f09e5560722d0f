pub(crate) mod rain;
