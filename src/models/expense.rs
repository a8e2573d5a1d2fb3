use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 支払い方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Card"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash" => Ok(PaymentMethod::Cash),
            "Card" => Ok(PaymentMethod::Card),
            other => Err(AppError::validation(format!(
                "支払い方法が不正です: {other}（Cash または Card を指定してください）"
            ))),
        }
    }
}

/// 経費カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    Transportation,
    Accommodation,
    Food,
    Entertainment,
    Shopping,
    Other,
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpenseType::Transportation => "Transportation",
            ExpenseType::Accommodation => "Accommodation",
            ExpenseType::Food => "Food",
            ExpenseType::Entertainment => "Entertainment",
            ExpenseType::Shopping => "Shopping",
            ExpenseType::Other => "Other",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for ExpenseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Transportation" => Ok(ExpenseType::Transportation),
            "Accommodation" => Ok(ExpenseType::Accommodation),
            "Food" => Ok(ExpenseType::Food),
            "Entertainment" => Ok(ExpenseType::Entertainment),
            "Shopping" => Ok(ExpenseType::Shopping),
            "Other" => Ok(ExpenseType::Other),
            other => Err(AppError::validation(format!(
                "経費カテゴリが不正です: {other}"
            ))),
        }
    }
}

/// 経費データモデル
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Expense {
    pub expense_id: String,
    pub trip_id: String,
    pub expense_date: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub expense_type: ExpenseType,
    pub currency: String,
    /// サーバー側で換算された金額
    pub converted_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// 経費作成用リクエスト
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateExpenseRequest {
    pub trip_id: String,
    pub expense_date: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub expense_type: ExpenseType,
}

impl CreateExpenseRequest {
    /// 送信前のクライアント側バリデーション
    ///
    /// # 戻り値
    /// 入力が有効な場合はOk(())、無効な場合はバリデーションエラー
    pub fn validate(&self) -> AppResult<()> {
        if self.trip_id.is_empty() {
            return Err(AppError::validation("旅行IDは必須です"));
        }
        if self.expense_date.is_empty() {
            return Err(AppError::validation("日付は必須です"));
        }

        // RFC 3339形式またはYYYY-MM-DD形式を受け付ける
        let parseable = chrono::DateTime::parse_from_rfc3339(&self.expense_date).is_ok()
            || NaiveDate::parse_from_str(&self.expense_date, "%Y-%m-%d").is_ok();
        if !parseable {
            return Err(AppError::validation(
                "日付の形式が正しくありません（YYYY-MM-DD形式で入力してください）",
            ));
        }

        if self.amount <= 0.0 {
            return Err(AppError::validation("金額は正の数値である必要があります"));
        }

        Ok(())
    }
}

/// POST /expenses に送信される完全な経費ペイロード
///
/// バックエンドは生成済みのexpense_idとISO形式のタイムスタンプを期待するため、
/// 送信前にクライアント側で両方を確定させる。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewExpensePayload {
    pub expense_id: String,
    pub trip_id: String,
    pub expense_date: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub expense_type: ExpenseType,
}
