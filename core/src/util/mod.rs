pub mod nullable;
pub mod sequence;
pub mod option;
