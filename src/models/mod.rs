/// ワイヤー形式のデータモデル
///
/// エンティティの所有者はバックエンドであり、クライアントはページの寿命に
/// 閉じた一時的なコピーのみを保持する。
pub mod common;
pub mod expense;
pub mod report;
pub mod trip;

pub use common::{ApiResponse, LoadingState};
pub use expense::{CreateExpenseRequest, Expense, ExpenseType, NewExpensePayload, PaymentMethod};
pub use report::{DailyReport, Report, ReportBreakdown, ReportKind, TripSummary, TypeReport};
pub use trip::{CreateTripRequest, Trip, TripList, TripStats};
