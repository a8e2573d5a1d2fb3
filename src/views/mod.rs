/// ビュー層
///
/// 非同期操作コントローラと、それをドメインサービスの呼び出しに
/// 束ねる画面別のビューモデルを提供する。状態はビューの寿命に閉じ、
/// ビューの破棄とともに実行中の取得もキャンセルされる。
pub mod dashboard;
pub mod operation;
pub mod trip_details;
pub mod trips;

pub use dashboard::{DashboardState, DashboardView};
pub use operation::AsyncOperation;
pub use trip_details::{TripDetailsState, TripDetailsView};
pub use trips::{TripsState, TripsView};
