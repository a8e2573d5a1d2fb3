use crate::models::{ExpenseType, PaymentMethod};

/// 選択可能な支払い方法の一覧
pub const PAYMENT_METHODS: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Card];

/// 選択可能な経費カテゴリの一覧
pub const EXPENSE_TYPES: [ExpenseType; 6] = [
    ExpenseType::Transportation,
    ExpenseType::Accommodation,
    ExpenseType::Food,
    ExpenseType::Entertainment,
    ExpenseType::Shopping,
    ExpenseType::Other,
];

/// 国内旅行のデフォルト通貨
pub const DOMESTIC_CURRENCY: &str = "COP";

/// 海外旅行のデフォルト通貨
pub const DEFAULT_INTERNATIONAL_CURRENCY: &str = "USD";
