use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 旅行データモデル
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trip {
    pub trip_id: String,
    pub start_date: String,
    pub end_date: String,
    pub is_international: bool,
    pub daily_budget: f64,
    pub currency: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// 旅行作成用リクエスト
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTripRequest {
    pub start_date: String,
    pub end_date: String,
    pub is_international: bool,
    pub daily_budget: f64,
    pub currency: String,
}

impl CreateTripRequest {
    /// 送信前のクライアント側バリデーション
    ///
    /// サーバー側でも検証されるが、不正な入力はネットワークに乗せる前に弾く。
    ///
    /// # 戻り値
    /// 入力が有効な場合はOk(())、無効な場合はバリデーションエラー
    pub fn validate(&self) -> AppResult<()> {
        if self.start_date.is_empty() {
            return Err(AppError::validation("開始日は必須です"));
        }
        if self.end_date.is_empty() {
            return Err(AppError::validation("終了日は必須です"));
        }

        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").map_err(|_| {
            AppError::validation("開始日の形式が正しくありません（YYYY-MM-DD形式で入力してください）")
        })?;
        let end = NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").map_err(|_| {
            AppError::validation("終了日の形式が正しくありません（YYYY-MM-DD形式で入力してください）")
        })?;

        // 不変条件: 終了日は開始日より後
        if end <= start {
            return Err(AppError::validation("終了日は開始日より後である必要があります"));
        }

        if self.daily_budget <= 0.0 {
            return Err(AppError::validation("1日の予算は正の数値である必要があります"));
        }

        if self.currency.is_empty() {
            return Err(AppError::validation("通貨コードは必須です"));
        }
        if self.currency.len() > 3 {
            return Err(AppError::validation("通貨コードは3文字以内で入力してください"));
        }

        Ok(())
    }
}

/// ダッシュボード用の集計統計
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripStats {
    pub total_trips: u32,
    pub active_trips: u32,
    pub total_expenses: f64,
    pub avg_daily_expense: f64,
}

/// 旅行一覧レスポンス
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripList {
    pub trips: Vec<Trip>,
    pub total: u32,
}
