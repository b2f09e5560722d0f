pub(crate) mod command;
pub(crate) mod compound;
pub(crate) mod document;
pub(crate) mod enums;
pub(crate) mod object;
