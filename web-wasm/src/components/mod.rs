//! UIコンポーネント

pub mod analysis_panel;
pub mod feature_showcase;
pub mod header;
pub mod toast;
pub mod upload_area;
