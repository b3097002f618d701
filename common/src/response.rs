//! バックエンドレスポンスの解釈
//!
//! `/api/analyze-fashion` のレスポンスボディを解析結果かエラーに分解し、
//! ユーザー向けエラーメッセージの優先順位を一か所にまとめる。

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, AnalyzeResponse};

/// どの経路からも詳細が取れなかったときの固定メッセージ
pub const GENERIC_FAILURE: &str = "Please try again with a clearer fashion photo";

impl AnalyzeResponse {
    /// レスポンス外枠を解析結果に変換する
    ///
    /// success=true で analysis が欠けている場合は全フォールバック表示の
    /// デフォルト値を返す（欠損はエラー扱いしない）
    pub fn into_result(self) -> Result<AnalysisResult> {
        if self.success {
            Ok(self.analysis.unwrap_or_default())
        } else {
            Err(Error::Analysis(
                self.error.unwrap_or_else(|| "Analysis failed".to_string()),
            ))
        }
    }
}

/// レスポンスボディ文字列をパースして解析結果に変換する
///
/// # Arguments
/// * `body` - `{"success": ..., "analysis": ..., "error": ...}` 形式のJSON
///
/// # Returns
/// * `Ok(AnalysisResult)` - success=true
/// * `Err(Error::Analysis)` - success=false（errorフィールドの文言）
/// * `Err(Error::Json)` - JSONとして不正
pub fn parse_analyze_response(body: &str) -> Result<AnalysisResult> {
    let response: AnalyzeResponse = serde_json::from_str(body)?;
    response.into_result()
}

/// HTTPエラーボディから `detail` 文字列を取り出す
///
/// FastAPIのHTTPExceptionは `{"detail": "..."}` を返す。
/// JSONでない・detailがない・文字列でない場合はNone
pub fn extract_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

/// ユーザー向け失敗メッセージを選ぶ
///
/// 優先順位: サーバーのdetail → エラーメッセージ → 固定文言
pub fn failure_message(detail: Option<String>, error: Option<String>) -> String {
    detail
        .or(error)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}
