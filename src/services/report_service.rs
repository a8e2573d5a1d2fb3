use crate::errors::AppResult;
use crate::models::{ApiResponse, DailyReport, Report, ReportKind, TripSummary, TypeReport};
use crate::services::api_client::HttpClient;
use async_trait::async_trait;
use std::sync::Arc;

/// レポートリソースのサービスインターフェース
#[async_trait]
pub trait ReportApi: Send + Sync {
    /// 日別レポートを取得する
    async fn get_daily_report(&self, trip_id: &str) -> AppResult<ApiResponse<DailyReport>>;

    /// カテゴリ別レポートを取得する
    async fn get_type_report(&self, trip_id: &str) -> AppResult<ApiResponse<TypeReport>>;

    /// 旅行サマリーを取得する
    async fn get_trip_summary(&self, trip_id: &str) -> AppResult<ApiResponse<TripSummary>>;

    /// 種別を指定してレポートを取得する
    ///
    /// レポートの形はReportKindで明示的に選択され、タグ付きのReportとして返る。
    async fn get_report(&self, kind: ReportKind, trip_id: &str) -> AppResult<ApiResponse<Report>>;
}

/// レポートサービス
///
/// 集計はすべてサーバー側で行われ、クライアントは描画以外で
/// レポート内容に関与しない。
pub struct ReportService<C: HttpClient> {
    api_client: Arc<C>,
}

impl<C: HttpClient> ReportService<C> {
    /// 新しいReportServiceを作成する
    ///
    /// # 引数
    /// * `api_client` - 共有トランスポートクライアント
    pub fn new(api_client: Arc<C>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl<C: HttpClient> ReportApi for ReportService<C> {
    async fn get_daily_report(&self, trip_id: &str) -> AppResult<ApiResponse<DailyReport>> {
        self.api_client.get(&format!("/reports/daily/{trip_id}")).await
    }

    async fn get_type_report(&self, trip_id: &str) -> AppResult<ApiResponse<TypeReport>> {
        self.api_client.get(&format!("/reports/type/{trip_id}")).await
    }

    async fn get_trip_summary(&self, trip_id: &str) -> AppResult<ApiResponse<TripSummary>> {
        self.api_client.get(&format!("/reports/summary/{trip_id}")).await
    }

    async fn get_report(&self, kind: ReportKind, trip_id: &str) -> AppResult<ApiResponse<Report>> {
        match kind {
            ReportKind::Daily => Ok(self
                .get_daily_report(trip_id)
                .await?
                .map(Report::Daily)),
            ReportKind::Type => Ok(self
                .get_type_report(trip_id)
                .await?
                .map(Report::Type)),
            ReportKind::Summary => Ok(self
                .get_trip_summary(trip_id)
                .await?
                .map(Report::Summary)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::RecordingClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_report_paths() {
        let breakdown = json!({
            "data": {"2024-03-01": {"cash": 10.0, "card": 20.0, "total": 30.0}},
            "status": 200
        });

        let client = Arc::new(RecordingClient::new(breakdown.clone()));
        let service = ReportService::new(Arc::clone(&client));
        service.get_daily_report("t1").await.unwrap();
        assert_eq!(client.calls()[0].path, "/reports/daily/t1");

        let client = Arc::new(RecordingClient::new(breakdown));
        let service = ReportService::new(Arc::clone(&client));
        service.get_type_report("t1").await.unwrap();
        assert_eq!(client.calls()[0].path, "/reports/type/t1");

        let client = Arc::new(RecordingClient::new(json!({
            "data": {
                "total_budget": 500.0,
                "total_expenses": 300.0,
                "remaining_budget": 200.0,
                "trip_days": 5,
                "average_daily_expense": 60.0
            },
            "status": 200
        })));
        let service = ReportService::new(Arc::clone(&client));
        service.get_trip_summary("t1").await.unwrap();
        assert_eq!(client.calls()[0].path, "/reports/summary/t1");
    }

    #[tokio::test]
    async fn test_get_report_returns_tagged_variant() {
        let client = Arc::new(RecordingClient::new(json!({
            "data": {"2024-03-01": {"cash": 10.0, "card": 20.0, "total": 30.0}},
            "status": 200,
            "message": "ok"
        })));
        let service = ReportService::new(Arc::clone(&client));

        let response = service.get_report(ReportKind::Daily, "t1").await.unwrap();

        // エンベロープのメタ情報を保ったままタグ付きバリアントになる
        assert_eq!(response.status, 200);
        assert_eq!(response.message, Some("ok".to_string()));
        match response.data {
            Report::Daily(report) => {
                assert_eq!(report["2024-03-01"].total, 30.0);
            }
            other => panic!("日別レポートを期待したが別のバリアントが返った: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_report_summary_variant() {
        let client = Arc::new(RecordingClient::new(json!({
            "data": {
                "total_budget": 500.0,
                "total_expenses": 300.0,
                "remaining_budget": 200.0,
                "trip_days": 5,
                "average_daily_expense": 60.0
            },
            "status": 200
        })));
        let service = ReportService::new(Arc::clone(&client));

        let response = service.get_report(ReportKind::Summary, "t1").await.unwrap();
        assert_eq!(response.data.kind(), ReportKind::Summary);
    }
}
