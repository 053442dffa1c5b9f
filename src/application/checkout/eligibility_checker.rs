use crate::domain::{self, value_objects::MemberId};
use chrono::NaiveDate;

use super::checkout_service::ServiceDependencies;
use super::errors::{CheckoutError, Result};

/// 貸出資格を確認する
///
/// リポジトリから会員の未返却の貸出を取得し、
/// `domain::eligibility::check_eligibility`で判定する。
/// 読み取りのみで副作用はない。
pub async fn check_eligibility(
    deps: &ServiceDependencies,
    member_id: &MemberId,
    today: NaiveDate,
) -> Result<()> {
    let outstanding_loans = deps
        .loan_repository
        .get_outstanding_loans(member_id)
        .await
        .map_err(CheckoutError::RepositoryError)?;

    domain::eligibility::check_eligibility(&outstanding_loans, today).map_err(|e| {
        tracing::warn!(
            member_id = %member_id,
            outstanding = outstanding_loans.len(),
            reason = ?e,
            "Checkout rejected"
        );
        CheckoutError::from(e)
    })
}
