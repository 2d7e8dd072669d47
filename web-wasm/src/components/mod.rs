pub mod error_panel;
pub mod header;
pub mod result_panels;
pub mod spinner;
pub mod upload_form;
