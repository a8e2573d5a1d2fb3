use crate::errors::AppResult;
use crate::models::{ApiResponse, CreateTripRequest, Trip, TripList, TripStats};
use crate::services::api_client::HttpClient;
use async_trait::async_trait;
use std::sync::Arc;

/// 旅行リソースのサービスインターフェース
#[async_trait]
pub trait TripApi: Send + Sync {
    /// すべての旅行を取得する
    async fn get_trips(&self) -> AppResult<ApiResponse<TripList>>;

    /// IDを指定して旅行を取得する
    async fn get_trip_by_id(&self, id: &str) -> AppResult<ApiResponse<Trip>>;

    /// 旅行を作成する
    async fn create_trip(&self, request: &CreateTripRequest) -> AppResult<ApiResponse<Trip>>;

    /// アクティブな旅行の一覧を取得する
    async fn get_active_trips(&self) -> AppResult<ApiResponse<TripList>>;

    /// ダッシュボード用の集計統計を取得する
    async fn get_dashboard_stats(&self) -> AppResult<ApiResponse<TripStats>>;
}

/// 旅行サービス
///
/// トランスポートクライアントへの純粋な委譲のみを行い、
/// ビジネスロジックは持たない。
pub struct TripService<C: HttpClient> {
    api_client: Arc<C>,
}

impl<C: HttpClient> TripService<C> {
    /// 新しいTripServiceを作成する
    ///
    /// # 引数
    /// * `api_client` - 共有トランスポートクライアント
    pub fn new(api_client: Arc<C>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl<C: HttpClient> TripApi for TripService<C> {
    async fn get_trips(&self) -> AppResult<ApiResponse<TripList>> {
        self.api_client.get("/trips").await
    }

    async fn get_trip_by_id(&self, id: &str) -> AppResult<ApiResponse<Trip>> {
        self.api_client.get(&format!("/trips/{id}")).await
    }

    async fn create_trip(&self, request: &CreateTripRequest) -> AppResult<ApiResponse<Trip>> {
        self.api_client.post("/trips", request).await
    }

    async fn get_active_trips(&self) -> AppResult<ApiResponse<TripList>> {
        self.api_client.get("/dashboard/active-trips").await
    }

    async fn get_dashboard_stats(&self) -> AppResult<ApiResponse<TripStats>> {
        self.api_client.get("/dashboard/stats").await
    }
}
