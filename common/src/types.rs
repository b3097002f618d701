//! 解析結果の型定義
//!
//! バックエンド `/api/analyze-fashion` と共有される型:
//! - AnalyzeResponse: レスポンス外枠（success / analysis / error）
//! - AnalysisResult: スタイリング解析の本体
//! - OverallAnalysis / ClothingPiece: AnalysisResultの内訳
//!
//! フィールドはすべてオプショナル。欠損は固定のフォールバック文字列で
//! 表示する（エラー扱いしない）。

use serde::{Deserialize, Serialize};

/// コーデ全体の評価
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallAnalysis {
    pub style_category: Option<String>,
    pub formality_level: Option<String>,
}

impl OverallAnalysis {
    pub fn style_category_text(&self) -> &str {
        self.style_category.as_deref().unwrap_or("Analyzed")
    }

    pub fn formality_text(&self) -> &str {
        self.formality_level.as_deref().unwrap_or("Determined")
    }
}

/// 識別された衣服アイテム
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothingPiece {
    #[serde(rename = "type")]
    pub piece_type: Option<String>,
    pub style_category: Option<String>,
    pub description: Option<String>,
    pub fit: Option<String>,
    pub pattern: Option<String>,
}

impl ClothingPiece {
    pub fn type_text(&self) -> &str {
        self.piece_type.as_deref().unwrap_or("Fashion Item")
    }

    pub fn style_text(&self) -> &str {
        self.style_category.as_deref().unwrap_or("Stylish")
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("Fashion item analyzed")
    }

    pub fn fit_text(&self) -> &str {
        self.fit.as_deref().unwrap_or("Analyzed")
    }

    pub fn pattern_text(&self) -> &str {
        self.pattern.as_deref().unwrap_or("Detected")
    }
}

/// AIスタイリング解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub overall_analysis: OverallAnalysis,
    pub occasion_recommendations: Option<Vec<String>>,
    pub color_palette: Option<Vec<String>>,
    pub styling_tips: Option<Vec<String>>,
    pub clothing_pieces: Option<Vec<ClothingPiece>>,
}

impl AnalysisResult {
    /// おすすめシーン。欠損時は "Versatile" 1件
    pub fn occasions(&self) -> Vec<String> {
        self.occasion_recommendations
            .clone()
            .unwrap_or_else(|| vec!["Versatile".to_string()])
    }

    /// カラーパレット。欠損時は固定文言1件
    pub fn colors(&self) -> Vec<String> {
        self.color_palette
            .clone()
            .unwrap_or_else(|| vec!["Stylish colors detected".to_string()])
    }

    /// スタイリングアドバイス。欠損時は固定文言1件
    pub fn tips(&self) -> Vec<String> {
        self.styling_tips
            .clone()
            .unwrap_or_else(|| vec!["Professional styling advice provided".to_string()])
    }

    /// 衣服アイテム一覧。カードは非空のときだけ描画する
    pub fn pieces(&self) -> Vec<ClothingPiece> {
        self.clothing_pieces.clone().unwrap_or_default()
    }

    pub fn has_pieces(&self) -> bool {
        self.clothing_pieces
            .as_ref()
            .is_some_and(|pieces| !pieces.is_empty())
    }
}

/// `/api/analyze-fashion` のレスポンス外枠
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: Option<AnalysisResult>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // デシリアライズテスト
    // =============================================

    #[test]
    fn test_analysis_result_deserialize_full() {
        let json = r#"{
            "overall_analysis": {
                "style_category": "casual chic",
                "formality_level": "smart casual"
            },
            "occasion_recommendations": ["brunch", "office"],
            "color_palette": ["navy", "cream"],
            "styling_tips": ["Add a belt"],
            "clothing_pieces": [
                {
                    "type": "blazer",
                    "style_category": "classic",
                    "description": "Navy single-breasted blazer",
                    "fit": "tailored",
                    "pattern": "solid"
                }
            ]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(
            result.overall_analysis.style_category.as_deref(),
            Some("casual chic")
        );
        assert_eq!(result.occasions(), vec!["brunch", "office"]);
        assert_eq!(result.colors(), vec!["navy", "cream"]);
        assert!(result.has_pieces());
        assert_eq!(result.pieces()[0].piece_type.as_deref(), Some("blazer"));
    }

    #[test]
    fn test_analysis_result_deserialize_empty_object() {
        // 全フィールド欠損でもパースできる
        let result: AnalysisResult = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_analyze_response_deserialize_success() {
        let json = r#"{"success": true, "analysis": {"styling_tips": ["Tuck it in"]}}"#;
        let response: AnalyzeResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.success);
        assert_eq!(
            response.analysis.unwrap().tips(),
            vec!["Tuck it in".to_string()]
        );
        assert!(response.error.is_none());
    }

    #[test]
    fn test_analyze_response_deserialize_failure() {
        let json = r#"{"success": false, "error": "Unable to analyze"}"#;
        let response: AnalyzeResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(!response.success);
        assert!(response.analysis.is_none());
        assert_eq!(response.error.as_deref(), Some("Unable to analyze"));
    }

    // =============================================
    // フォールバックテスト
    // =============================================

    #[test]
    fn test_overall_analysis_fallbacks() {
        let overall = OverallAnalysis::default();
        assert_eq!(overall.style_category_text(), "Analyzed");
        assert_eq!(overall.formality_text(), "Determined");

        let overall = OverallAnalysis {
            style_category: Some("bohemian".to_string()),
            formality_level: Some("casual".to_string()),
        };
        assert_eq!(overall.style_category_text(), "bohemian");
        assert_eq!(overall.formality_text(), "casual");
    }

    #[test]
    fn test_list_fallbacks_when_absent() {
        let result = AnalysisResult::default();
        assert_eq!(result.occasions(), vec!["Versatile"]);
        assert_eq!(result.colors(), vec!["Stylish colors detected"]);
        assert_eq!(result.tips(), vec!["Professional styling advice provided"]);
        assert!(!result.has_pieces());
    }

    #[test]
    fn test_empty_list_is_not_fallback() {
        // 空配列はフォールバックせず空のまま表示する
        let result = AnalysisResult {
            occasion_recommendations: Some(vec![]),
            color_palette: Some(vec![]),
            ..Default::default()
        };
        assert!(result.occasions().is_empty());
        assert!(result.colors().is_empty());
    }

    #[test]
    fn test_clothing_piece_fallbacks() {
        let piece = ClothingPiece::default();
        assert_eq!(piece.type_text(), "Fashion Item");
        assert_eq!(piece.style_text(), "Stylish");
        assert_eq!(piece.description_text(), "Fashion item analyzed");
        assert_eq!(piece.fit_text(), "Analyzed");
        assert_eq!(piece.pattern_text(), "Detected");
    }

    #[test]
    fn test_clothing_piece_type_key() {
        // JSONキーは "type"
        let piece: ClothingPiece =
            serde_json::from_str(r#"{"type": "dress"}"#).expect("デシリアライズ失敗");
        assert_eq!(piece.piece_type.as_deref(), Some("dress"));

        let json = serde_json::to_string(&piece).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"dress\""));
    }
}
