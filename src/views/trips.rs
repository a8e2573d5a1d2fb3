use crate::errors::ErrorState;
use crate::models::{Trip, TripList};
use crate::services::ServiceContainer;
use crate::views::operation::AsyncOperation;
use std::sync::Arc;

/// 旅行一覧の表示用スナップショット
#[derive(Debug, Clone)]
pub struct TripsState {
    /// 旅行一覧（未取得時は空）
    pub trips: Vec<Trip>,
    /// 取得が実行中ならtrue
    pub loading: bool,
    /// 取得エラー
    pub error: Option<ErrorState>,
}

/// 旅行一覧ビュー
pub struct TripsView {
    services: Arc<ServiceContainer>,
    trips: AsyncOperation<TripList>,
}

impl TripsView {
    /// 新しい旅行一覧ビューを作成する
    ///
    /// # 引数
    /// * `services` - 共有サービスコンテナ
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self {
            services,
            trips: AsyncOperation::new(),
        }
    }

    /// 旅行一覧を取得する
    pub async fn load(&self) -> Option<TripList> {
        let service = self.services.trip_service();
        self.trips
            .execute(async move {
                let response = service.get_trips().await?;
                Ok(response.data)
            })
            .await
    }

    /// 取得をやり直す
    pub async fn refetch(&self) {
        self.load().await;
    }

    /// 現在の表示用スナップショットを取得する
    pub fn state(&self) -> TripsState {
        TripsState {
            trips: self.trips.data().map(|list| list.trips).unwrap_or_default(),
            loading: self.trips.is_loading(),
            error: self.trips.error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::RecordingClient;
    use crate::services::{ExpenseService, ReportService, TripService};
    use serde_json::json;

    fn trip_json(id: &str) -> serde_json::Value {
        json!({
            "trip_id": id,
            "start_date": "2024-03-01",
            "end_date": "2024-03-05",
            "is_international": false,
            "daily_budget": 50000.0,
            "currency": "COP",
            "is_active": true
        })
    }

    fn test_container(client: Arc<RecordingClient>) -> Arc<ServiceContainer> {
        Arc::new(ServiceContainer::from_parts(
            Arc::new(TripService::new(Arc::clone(&client))),
            Arc::new(ExpenseService::new(Arc::clone(&client))),
            Arc::new(ReportService::new(client)),
        ))
    }

    #[tokio::test]
    async fn test_load_populates_trips() {
        let client = Arc::new(RecordingClient::new(json!({
            "data": {"trips": [trip_json("t1"), trip_json("t2")], "total": 2},
            "status": 200
        })));
        let view = TripsView::new(test_container(Arc::clone(&client)));

        let result = view.load().await;
        assert_eq!(result.unwrap().total, 2);

        let state = view.state();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.trips.len(), 2);
        assert_eq!(state.trips[0].trip_id, "t1");
        assert_eq!(client.calls()[0].path, "/trips");
    }

    #[tokio::test]
    async fn test_refetch_issues_new_request() {
        let client = Arc::new(RecordingClient::new(json!({
            "data": {"trips": [], "total": 0},
            "status": 200
        })));
        let view = TripsView::new(test_container(Arc::clone(&client)));

        view.load().await;
        view.refetch().await;

        assert_eq!(client.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_state_before_load_is_empty() {
        let client = Arc::new(RecordingClient::new(json!(null)));
        let view = TripsView::new(test_container(client));

        let state = view.state();
        assert!(state.trips.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }
}
