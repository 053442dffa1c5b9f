use crate::domain::{commands::CheckoutBook, loan::Loan};
use crate::ports::*;
use std::str::FromStr;
use std::sync::Arc;

use super::copy_allocator::allocate_copy;
use super::eligibility_checker::check_eligibility;
use super::errors::Result;

/// 返却リマインダーを予約するタイミング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderTiming {
    /// 候補ごとに、確保の前に予約する
    ///
    /// 確保に失敗した候補の予約が残ることがある。
    #[default]
    BeforeClaim,
    /// 確保に成功した貸出に対してのみ予約する
    AfterClaim,
}

impl ReminderTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderTiming::BeforeClaim => "before_claim",
            ReminderTiming::AfterClaim => "after_claim",
        }
    }
}

impl FromStr for ReminderTiming {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "before_claim" => Ok(ReminderTiming::BeforeClaim),
            "after_claim" => Ok(ReminderTiming::AfterClaim),
            _ => Err(format!("Invalid reminder timing: {}", s)),
        }
    }
}

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、各関数に依存関係として渡す。
/// 呼び出し間で状態を保持しない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub loan_repository: Arc<dyn LoanRepository>,
    pub reminder_service: Arc<dyn ReminderService>,
    pub reminder_timing: ReminderTiming,
}

/// 書籍を貸し出す
///
/// 処理フロー：
/// 1. 貸出資格の確認（不可ならここで終了）
/// 2. 蔵書の確保
///
/// リトライは蔵書の確保ループ内に限定される。確保に失敗しても
/// 資格確認はやり直さない。
///
/// # 戻り値
/// 成功時は保存された貸出
///
/// # エラー
/// - TooManyCheckedOutBooks / PastDueBooks: 貸出資格なし
/// - NoCopiesAvailable: 確保できる蔵書がない
/// - RepositoryError / ReminderServiceError: 協調サービスの障害（そのまま伝播）
pub async fn checkout_book(deps: &ServiceDependencies, cmd: CheckoutBook) -> Result<Loan> {
    let today = cmd.requested_at.date_naive();

    check_eligibility(deps, &cmd.member_id, today).await?;

    let loan = allocate_copy(deps, &cmd.member_id, &cmd.isbn, cmd.requested_at).await?;

    tracing::info!(
        member_id = %loan.member_id(),
        isbn = %loan.isbn(),
        copy_id = %loan.copy_id(),
        due_date = %loan.due_date(),
        "Book checked out"
    );

    Ok(loan)
}
