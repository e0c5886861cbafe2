pub mod header;
pub mod upload_area;
pub mod result_panel;
pub mod score_breakdown;
