
pub mod initialize_test;
pub mod sweep_test;
