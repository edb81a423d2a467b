pub mod host;
pub mod lospec;
pub mod ops;
pub mod palettes;
