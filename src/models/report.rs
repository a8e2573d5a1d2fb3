use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 現金・カード別の集計内訳
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ReportBreakdown {
    pub cash: f64,
    pub card: f64,
    pub total: f64,
}

/// 日付ごとの集計レポート（キーはYYYY-MM-DD形式の日付）
///
/// BTreeMapを使い、描画時の反復順序を日付順で安定させる。
pub type DailyReport = BTreeMap<String, ReportBreakdown>;

/// カテゴリごとの集計レポート（キーは経費カテゴリ名）
pub type TypeReport = BTreeMap<String, ReportBreakdown>;

/// 旅行全体のサマリーレポート
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripSummary {
    pub total_budget: f64,
    pub total_expenses: f64,
    pub remaining_budget: f64,
    pub trip_days: u32,
    pub average_daily_expense: f64,
}

/// レポートの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    /// 日別レポート
    Daily,
    /// カテゴリ別レポート
    Type,
    /// サマリーレポート
    Summary,
}

impl ReportKind {
    /// エンドポイントパスに使用するセグメント名を取得
    pub fn path_segment(&self) -> &'static str {
        match self {
            ReportKind::Daily => "daily",
            ReportKind::Type => "type",
            ReportKind::Summary => "summary",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

impl std::str::FromStr for ReportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(ReportKind::Daily),
            "type" => Ok(ReportKind::Type),
            "summary" => Ok(ReportKind::Summary),
            other => Err(AppError::validation(format!(
                "レポート種別が不正です: {other}（daily / type / summary を指定してください）"
            ))),
        }
    }
}

/// 種類ごとに型付けされたレポートペイロード
///
/// レポートの形はReportKindで明示的に選択され、緩い型のオブジェクトから
/// 推測されることはない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Report {
    Daily(DailyReport),
    Type(TypeReport),
    Summary(TripSummary),
}

impl Report {
    /// このペイロードに対応するレポート種別を取得
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Daily(_) => ReportKind::Daily,
            Report::Type(_) => ReportKind::Type,
            Report::Summary(_) => ReportKind::Summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_path_segments() {
        assert_eq!(ReportKind::Daily.path_segment(), "daily");
        assert_eq!(ReportKind::Type.path_segment(), "type");
        assert_eq!(ReportKind::Summary.path_segment(), "summary");
    }

    #[test]
    fn test_report_kind_from_str() {
        assert_eq!("daily".parse::<ReportKind>().unwrap(), ReportKind::Daily);
        assert_eq!("summary".parse::<ReportKind>().unwrap(), ReportKind::Summary);
        assert!("weekly".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_daily_report_deserialization() {
        // 日付キーのマップとして読み取れることを確認
        let json = r#"{
            "2024-03-01": {"cash": 100.0, "card": 50.0, "total": 150.0},
            "2024-03-02": {"cash": 0.0, "card": 80.0, "total": 80.0}
        }"#;

        let report: DailyReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report["2024-03-01"].total, 150.0);

        // BTreeMapなので日付順に反復される
        let dates: Vec<&String> = report.keys().collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-03-02"]);
    }

    #[test]
    fn test_report_variant_kind() {
        let summary = Report::Summary(TripSummary {
            total_budget: 500.0,
            total_expenses: 300.0,
            remaining_budget: 200.0,
            trip_days: 5,
            average_daily_expense: 60.0,
        });
        assert_eq!(summary.kind(), ReportKind::Summary);
    }
}
