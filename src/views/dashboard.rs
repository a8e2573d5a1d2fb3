use crate::errors::ErrorState;
use crate::models::{Trip, TripList, TripStats};
use crate::services::ServiceContainer;
use crate::views::operation::AsyncOperation;
use std::sync::Arc;

/// ダッシュボードの表示用スナップショット
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// 集計統計
    pub stats: Option<TripStats>,
    /// アクティブな旅行一覧（未取得時は空）
    pub active_trips: Vec<Trip>,
    /// いずれかの取得が実行中ならtrue
    pub loading: bool,
    /// 構成要素のうち最初の非nullエラー
    pub error: Option<ErrorState>,
}

/// ダッシュボードビュー
///
/// 統計とアクティブ旅行の2つの取得コントローラを束ね、
/// 集約されたローディング・エラー状態を公開する。
pub struct DashboardView {
    services: Arc<ServiceContainer>,
    stats: AsyncOperation<TripStats>,
    active_trips: AsyncOperation<TripList>,
}

impl DashboardView {
    /// 新しいダッシュボードビューを作成する
    ///
    /// # 引数
    /// * `services` - 共有サービスコンテナ
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self {
            services,
            stats: AsyncOperation::new(),
            active_trips: AsyncOperation::new(),
        }
    }

    /// 両方の取得を並行して実行する
    ///
    /// 2つの取得の完了順序には保証がない。
    pub async fn load(&self) {
        futures::join!(self.fetch_stats(), self.fetch_active_trips());
    }

    /// 集計統計を取得する
    pub async fn fetch_stats(&self) -> Option<TripStats> {
        let service = self.services.trip_service();
        self.stats
            .execute(async move {
                let response = service.get_dashboard_stats().await?;
                Ok(response.data)
            })
            .await
    }

    /// アクティブな旅行一覧を取得する
    pub async fn fetch_active_trips(&self) -> Option<TripList> {
        let service = self.services.trip_service();
        self.active_trips
            .execute(async move {
                let response = service.get_active_trips().await?;
                Ok(response.data)
            })
            .await
    }

    /// すべての取得をやり直す
    pub async fn refetch(&self) {
        self.load().await;
    }

    /// 現在の表示用スナップショットを取得する
    pub fn state(&self) -> DashboardState {
        DashboardState {
            stats: self.stats.data(),
            active_trips: self
                .active_trips
                .data()
                .map(|list| list.trips)
                .unwrap_or_default(),
            loading: self.stats.is_loading() || self.active_trips.is_loading(),
            error: self.stats.error().or_else(|| self.active_trips.error()),
        }
    }
}
