pub mod table_renderer;
pub mod test_mode;
