use crate::errors::ErrorState;
use crate::models::{Expense, Trip};
use crate::services::ServiceContainer;
use crate::views::operation::AsyncOperation;
use std::sync::Arc;

/// 旅行詳細の表示用スナップショット
#[derive(Debug, Clone)]
pub struct TripDetailsState {
    /// 旅行情報
    pub trip: Option<Trip>,
    /// 経費一覧（未取得時は空）
    pub expenses: Vec<Expense>,
    /// いずれかの取得が実行中ならtrue
    pub loading: bool,
    /// 構成要素のうち最初の非nullエラー
    pub error: Option<ErrorState>,
}

/// 旅行詳細ビュー
///
/// 旅行情報と経費一覧の2つの取得コントローラを旅行IDで束ねる。
/// 片方の取得が失敗してももう片方の結果は保持される。
pub struct TripDetailsView {
    services: Arc<ServiceContainer>,
    trip: AsyncOperation<Trip>,
    expenses: AsyncOperation<Vec<Expense>>,
}

impl TripDetailsView {
    /// 新しい旅行詳細ビューを作成する
    ///
    /// # 引数
    /// * `services` - 共有サービスコンテナ
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self {
            services,
            trip: AsyncOperation::new(),
            expenses: AsyncOperation::new(),
        }
    }

    /// 旅行情報と経費一覧を並行して取得する
    ///
    /// # 引数
    /// * `trip_id` - 旅行ID
    pub async fn load(&self, trip_id: &str) {
        futures::join!(self.refetch_trip(trip_id), self.refetch_expenses(trip_id));
    }

    /// 旅行情報のみ取得し直す
    pub async fn refetch_trip(&self, trip_id: &str) -> Option<Trip> {
        let service = self.services.trip_service();
        let id = trip_id.to_string();
        self.trip
            .execute(async move {
                let response = service.get_trip_by_id(&id).await?;
                Ok(response.data)
            })
            .await
    }

    /// 経費一覧のみ取得し直す
    pub async fn refetch_expenses(&self, trip_id: &str) -> Option<Vec<Expense>> {
        let service = self.services.expense_service();
        let id = trip_id.to_string();
        self.expenses
            .execute(async move {
                let response = service.get_trip_expenses(&id).await?;
                Ok(response.data)
            })
            .await
    }

    /// 現在の表示用スナップショットを取得する
    pub fn state(&self) -> TripDetailsState {
        TripDetailsState {
            trip: self.trip.data(),
            expenses: self.expenses.data().unwrap_or_default(),
            loading: self.trip.is_loading() || self.expenses.is_loading(),
            error: self.trip.error().or_else(|| self.expenses.error()),
        }
    }
}
