pub mod commit;
pub mod format;
pub mod median;
pub mod validation;
