use crate::domain::{
    self,
    loan::Loan,
    value_objects::{Isbn, MemberId},
};
use chrono::{DateTime, Utc};

use super::checkout_service::{ReminderTiming, ServiceDependencies};
use super::errors::{CheckoutError, Result};

/// 蔵書を確保して貸出を作成する
///
/// 候補の蔵書をリポジトリが返した順に試行し、最初に確保できた1冊を貸し出す。
/// 候補一覧は古い可能性があるため、確保の失敗はエラーではなく次の候補へ進む。
///
/// 並行性の保証はリポジトリの`try_create_loan`（原子的な条件付き作成）のみに
/// 依存する。ここでは確認と書き込みを分けない。
///
/// # エラー
/// - NoCopiesAvailable: 候補が空、またはすべての候補の確保に失敗
pub async fn allocate_copy(
    deps: &ServiceDependencies,
    member_id: &MemberId,
    isbn: &Isbn,
    requested_at: DateTime<Utc>,
) -> Result<Loan> {
    let candidates = deps
        .loan_repository
        .get_available_copy_ids(isbn)
        .await
        .map_err(CheckoutError::RepositoryError)?;

    if candidates.is_empty() {
        tracing::warn!(isbn = %isbn, "No copies listed as available");
        return Err(CheckoutError::NoCopiesAvailable);
    }

    let attempts = candidates.len();

    for copy_id in candidates {
        let loan = domain::loan::check_out_copy(
            member_id.clone(),
            isbn.clone(),
            copy_id,
            requested_at,
        );

        if deps.reminder_timing == ReminderTiming::BeforeClaim {
            schedule_reminders(deps, &loan).await?;
        }

        let claimed = deps
            .loan_repository
            .try_create_loan(&loan)
            .await
            .map_err(CheckoutError::RepositoryError)?;

        if claimed {
            if deps.reminder_timing == ReminderTiming::AfterClaim {
                schedule_reminders(deps, &loan).await?;
            }
            return Ok(loan);
        }

        tracing::debug!(
            isbn = %isbn,
            copy_id = %loan.copy_id(),
            "Copy already claimed, trying next candidate"
        );
    }

    tracing::warn!(isbn = %isbn, attempts, "Every candidate copy was claimed concurrently");
    Err(CheckoutError::NoCopiesAvailable)
}

async fn schedule_reminders(deps: &ServiceDependencies, loan: &Loan) -> Result<()> {
    deps.reminder_service
        .schedule_reminders(loan)
        .await
        .map_err(CheckoutError::ReminderServiceError)
}
