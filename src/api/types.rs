use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{commands::CheckoutBook, loan::Loan, value_objects::*};

/// 貸出リクエスト（POST /checkouts）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub member_id: String,
    pub isbn: String,
}

impl CheckoutRequest {
    /// 識別子が空でないか検証する
    pub fn validate(&self) -> Result<(), String> {
        if self.member_id.trim().is_empty() {
            return Err("member_id must not be empty".to_string());
        }
        if self.isbn.trim().is_empty() {
            return Err("isbn must not be empty".to_string());
        }
        Ok(())
    }

    /// 現在時刻（UTC）を貸出日時としてコマンドに変換する
    pub fn to_command(&self) -> CheckoutBook {
        CheckoutBook {
            member_id: MemberId::new(self.member_id.clone()),
            isbn: Isbn::new(self.isbn.clone()),
            requested_at: chrono::Utc::now(),
        }
    }
}

/// 貸出レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResponse {
    pub member_id: String,
    pub isbn: String,
    pub copy_id: String,
    pub due_date: NaiveDate,
    pub was_returned: bool,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            member_id: loan.member_id().to_string(),
            isbn: loan.isbn().to_string(),
            copy_id: loan.copy_id().to_string(),
            due_date: loan.due_date(),
            was_returned: loan.was_returned(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
