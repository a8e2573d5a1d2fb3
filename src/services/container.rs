use crate::config::ApiConfig;
use crate::errors::AppResult;
use crate::services::api_client::ApiClient;
use crate::services::expense_service::{ExpenseApi, ExpenseService};
use crate::services::report_service::{ReportApi, ReportService};
use crate::services::trip_service::{TripApi, TripService};
use std::sync::Arc;

/// サービスの合成ルート
///
/// プロセス起動時に一度だけ構築され、トランスポートクライアント1つと
/// 各ドメインサービス1インスタンスを束ねて明示的に受け渡す。
/// 隠れたグローバル状態は持たず、構築後は読み取り専用。
pub struct ServiceContainer {
    trip_service: Arc<dyn TripApi>,
    expense_service: Arc<dyn ExpenseApi>,
    report_service: Arc<dyn ReportApi>,
}

impl ServiceContainer {
    /// API設定からサービス一式を構築する
    ///
    /// # 引数
    /// * `config` - API接続設定
    ///
    /// # 戻り値
    /// サービスコンテナ、または構築に失敗した場合はエラー
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let api_client = Arc::new(ApiClient::new(config)?);

        log::info!("サービスコンテナを構築しました");

        Ok(Self::from_parts(
            Arc::new(TripService::new(Arc::clone(&api_client))),
            Arc::new(ExpenseService::new(Arc::clone(&api_client))),
            Arc::new(ReportService::new(api_client)),
        ))
    }

    /// 構築済みのサービスインスタンスから合成する
    ///
    /// テストや別構成での差し替えに使用する。
    pub fn from_parts(
        trip_service: Arc<dyn TripApi>,
        expense_service: Arc<dyn ExpenseApi>,
        report_service: Arc<dyn ReportApi>,
    ) -> Self {
        Self {
            trip_service,
            expense_service,
            report_service,
        }
    }

    /// 旅行サービスを取得する（常に同一インスタンス）
    pub fn trip_service(&self) -> Arc<dyn TripApi> {
        Arc::clone(&self.trip_service)
    }

    /// 経費サービスを取得する（常に同一インスタンス）
    pub fn expense_service(&self) -> Arc<dyn ExpenseApi> {
        Arc::clone(&self.expense_service)
    }

    /// レポートサービスを取得する（常に同一インスタンス）
    pub fn report_service(&self) -> Arc<dyn ReportApi> {
        Arc::clone(&self.report_service)
    }
}
