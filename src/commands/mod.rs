pub mod check;
pub mod compile;
pub mod inspect;
pub mod keys;
