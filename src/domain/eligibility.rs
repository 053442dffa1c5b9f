use chrono::NaiveDate;

use super::EligibilityError;
use super::loan::{Loan, MAX_OUTSTANDING_LOANS, is_past_due};

/// 純粋関数：貸出資格を判定する
///
/// ビジネスルール（評価順）：
/// 1. 未返却の貸出数 + 今回の1冊が上限（10冊）を超える場合は不可
/// 2. 返却期限を過ぎた貸出が1件でもある場合は不可
///
/// 両方に該当する場合は上限超過を優先する。
/// 同じ貸出一覧と日付からは常に同じ結果を返す（隠れた状態なし）。
pub fn check_eligibility(
    outstanding_loans: &[Loan],
    today: NaiveDate,
) -> Result<(), EligibilityError> {
    if outstanding_loans.len() + 1 > MAX_OUTSTANDING_LOANS {
        return Err(EligibilityError::TooManyCheckedOutBooks);
    }

    if outstanding_loans
        .iter()
        .any(|loan| is_past_due(loan, today))
    {
        return Err(EligibilityError::PastDueBooks);
    }

    Ok(())
}
