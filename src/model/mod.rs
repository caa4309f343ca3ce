pub mod locale;
pub mod tip;
