pub(crate) mod gpl;
pub mod palette;
