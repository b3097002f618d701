//! AI Fashion Stylist Common Library
//!
//! Web(WASM)フロントエンドと共有される型とユーティリティ

pub mod error;
pub mod response;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
pub use response::{extract_error_detail, failure_message, parse_analyze_response, GENERIC_FAILURE};
pub use types::{AnalysisResult, AnalyzeResponse, ClothingPiece, OverallAnalysis};
pub use validate::{validate_upload, ValidationError, MAX_UPLOAD_BYTES};
