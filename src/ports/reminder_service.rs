use crate::domain::loan::Loan;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 返却リマインダーサービスポート
///
/// 返却期限の通知の配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
#[async_trait]
pub trait ReminderService: Send + Sync {
    /// 貸出の返却期限リマインダーを予約する
    ///
    /// 確保に失敗する候補の貸出に対して呼ばれることがある。
    /// この呼び出しだけで永続的な約束は発生しないものとして、
    /// 実装は孤立した予約を許容すること。
    async fn schedule_reminders(&self, loan: &Loan) -> Result<()>;
}
