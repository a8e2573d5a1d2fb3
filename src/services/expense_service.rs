use crate::errors::{AppError, AppResult};
use crate::models::{ApiResponse, CreateExpenseRequest, Expense, NewExpensePayload};
use crate::services::api_client::HttpClient;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// 経費リソースのサービスインターフェース
#[async_trait]
pub trait ExpenseApi: Send + Sync {
    /// 経費を登録する
    async fn add_expense(&self, request: &CreateExpenseRequest) -> AppResult<ApiResponse<Expense>>;

    /// 指定した旅行の経費一覧を取得する
    async fn get_trip_expenses(&self, trip_id: &str) -> AppResult<ApiResponse<Vec<Expense>>>;
}

/// 経費サービス
///
/// 他のサービスと同様に委譲のみだが、add_expenseだけは例外として
/// 経費IDの生成と日付の正規化をクライアント側で行う。
pub struct ExpenseService<C: HttpClient> {
    api_client: Arc<C>,
}

impl<C: HttpClient> ExpenseService<C> {
    /// 新しいExpenseServiceを作成する
    ///
    /// # 引数
    /// * `api_client` - 共有トランスポートクライアント
    pub fn new(api_client: Arc<C>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl<C: HttpClient> ExpenseApi for ExpenseService<C> {
    async fn add_expense(&self, request: &CreateExpenseRequest) -> AppResult<ApiResponse<Expense>> {
        // バックエンドは生成済みIDとISO形式タイムスタンプを期待する
        let payload = NewExpensePayload {
            expense_id: Uuid::new_v4().to_string(),
            trip_id: request.trip_id.clone(),
            expense_date: normalize_expense_date(&request.expense_date)?,
            amount: request.amount,
            payment_method: request.payment_method,
            expense_type: request.expense_type,
        };

        log::debug!(
            "経費を登録します: expense_id={}, trip_id={}",
            payload.expense_id,
            payload.trip_id
        );

        self.api_client.post("/expenses", &payload).await
    }

    async fn get_trip_expenses(&self, trip_id: &str) -> AppResult<ApiResponse<Vec<Expense>>> {
        self.api_client.get(&format!("/expenses/{trip_id}")).await
    }
}

/// 経費日付をISO 8601（UTC、ミリ秒精度）のタイムスタンプ文字列へ正規化する
///
/// # 引数
/// * `raw` - RFC 3339タイムスタンプまたはYYYY-MM-DD形式の日付文字列
///
/// # 戻り値
/// 正規化されたタイムスタンプ（例: "2024-03-01T00:00:00.000Z"）
pub fn normalize_expense_date(raw: &str) -> AppResult<String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true));
    }

    // 素の日付はUTC深夜0時として扱う
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::validation("日付の形式が正しくありません（YYYY-MM-DD形式で入力してください）")
    })?;
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();

    Ok(Utc
        .from_utc_datetime(&midnight)
        .to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseType, PaymentMethod};
    use crate::services::testing::RecordingClient;
    use serde_json::json;

    fn expense_response() -> serde_json::Value {
        json!({
            "data": {
                "expense_id": "e1",
                "trip_id": "t1",
                "expense_date": "2024-03-01T00:00:00.000Z",
                "amount": 25.5,
                "payment_method": "Card",
                "expense_type": "Food",
                "currency": "USD",
                "converted_amount": 25.5
            },
            "status": 201
        })
    }

    fn create_request(date: &str) -> CreateExpenseRequest {
        CreateExpenseRequest {
            trip_id: "t1".to_string(),
            expense_date: date.to_string(),
            amount: 25.5,
            payment_method: PaymentMethod::Card,
            expense_type: ExpenseType::Food,
        }
    }

    #[test]
    fn test_normalize_bare_date() {
        // 素の日付はUTC深夜0時のISO 8601タイムスタンプになる
        assert_eq!(
            normalize_expense_date("2024-03-01").unwrap(),
            "2024-03-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_normalize_rfc3339_converts_to_utc() {
        assert_eq!(
            normalize_expense_date("2024-03-01T10:30:00+05:00").unwrap(),
            "2024-03-01T05:30:00.000Z"
        );
    }

    #[test]
    fn test_normalize_rejects_malformed_date() {
        assert!(normalize_expense_date("01/03/2024").is_err());
        assert!(normalize_expense_date("").is_err());
    }

    #[tokio::test]
    async fn test_add_expense_generates_id_and_normalizes_date() {
        let client = Arc::new(RecordingClient::new(expense_response()));
        let service = ExpenseService::new(Arc::clone(&client));

        service.add_expense(&create_request("2024-03-01")).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].path, "/expenses");

        let body = calls[0].body.clone().unwrap();
        // 生成されたIDは空でないUUID
        let expense_id = body["expense_id"].as_str().unwrap();
        assert!(!expense_id.is_empty());
        assert!(Uuid::parse_str(expense_id).is_ok());
        // 素の日付がISO 8601タイムスタンプに正規化されている
        assert_eq!(body["expense_date"], "2024-03-01T00:00:00.000Z");
        assert_eq!(body["trip_id"], "t1");
        assert_eq!(body["payment_method"], "Card");
        assert_eq!(body["expense_type"], "Food");
    }

    #[tokio::test]
    async fn test_add_expense_generates_fresh_id_each_call() {
        let client = Arc::new(RecordingClient::new(expense_response()));
        let service = ExpenseService::new(Arc::clone(&client));

        service.add_expense(&create_request("2024-03-01")).await.unwrap();
        service.add_expense(&create_request("2024-03-01")).await.unwrap();

        let calls = client.calls();
        let first = calls[0].body.clone().unwrap()["expense_id"].clone();
        let second = calls[1].body.clone().unwrap()["expense_id"].clone();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_get_trip_expenses_path() {
        let client = Arc::new(RecordingClient::new(json!({
            "data": [],
            "status": 200
        })));
        let service = ExpenseService::new(Arc::clone(&client));

        let response = service.get_trip_expenses("t1").await.unwrap();
        assert!(response.data.is_empty());
        assert_eq!(client.calls()[0].path, "/expenses/t1");
    }
}
