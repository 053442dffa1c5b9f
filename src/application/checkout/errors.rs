use crate::domain::EligibilityError;
use thiserror::Error;

/// 貸出処理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// 未返却の貸出が上限（10冊）に達している
    #[error("Too many checked out books (max 10 outstanding loans)")]
    TooManyCheckedOutBooks,

    /// 返却期限を過ぎた貸出がある
    #[error("Member has past due books")]
    PastDueBooks,

    /// 確保できる蔵書がない
    #[error("No copies available")]
    NoCopiesAvailable,

    /// LoanRepositoryのエラー
    #[error("Loan repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ReminderServiceのエラー
    #[error("Reminder service error")]
    ReminderServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<EligibilityError> for CheckoutError {
    fn from(err: EligibilityError) -> Self {
        match err {
            EligibilityError::TooManyCheckedOutBooks => CheckoutError::TooManyCheckedOutBooks,
            EligibilityError::PastDueBooks => CheckoutError::PastDueBooks,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CheckoutError>;
