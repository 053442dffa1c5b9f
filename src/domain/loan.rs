use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{CopyId, Isbn, MemberId};

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: u64 = 14;

/// 会員1人あたりの未返却貸出の上限
pub const MAX_OUTSTANDING_LOANS: usize = 10;

/// 貸出 - 物理的な1冊の1回の貸出
///
/// 値オブジェクトとして扱う：
/// - 生成時にすべてのフィールドが確定し、以後変更されない（セッターなし）
/// - 等価性は値で判定する
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Loan {
    member_id: MemberId,
    isbn: Isbn,
    copy_id: CopyId,
    due_date: NaiveDate,
    was_returned: bool,
}

impl Loan {
    /// 全フィールドを指定して貸出を構築する
    ///
    /// ストレージからの復元やテストデータの作成に使用される。
    /// 新規の貸出は`check_out_copy()`で作成する。
    pub fn new(
        member_id: MemberId,
        isbn: Isbn,
        copy_id: CopyId,
        due_date: NaiveDate,
        was_returned: bool,
    ) -> Self {
        Self {
            member_id,
            isbn,
            copy_id,
            due_date,
            was_returned,
        }
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn copy_id(&self) -> &CopyId {
        &self.copy_id
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn was_returned(&self) -> bool {
        self.was_returned
    }
}

/// 純粋関数：返却期限を計算する
///
/// UTCの日付に切り捨ててから貸出期間を加算する（時刻成分は持たない）。
pub fn due_date_for(requested_at: DateTime<Utc>) -> NaiveDate {
    requested_at.date_naive() + Days::new(LOAN_PERIOD_DAYS)
}

/// 純粋関数：蔵書1冊の貸出候補を作成する
///
/// ビジネスルール：
/// - 返却期限は貸出日（UTC）+ 14日
/// - 未返却として作成される
///
/// 副作用なし。永続化は呼び出し側がリポジトリ経由で行う。
pub fn check_out_copy(
    member_id: MemberId,
    isbn: Isbn,
    copy_id: CopyId,
    requested_at: DateTime<Utc>,
) -> Loan {
    Loan::new(member_id, isbn, copy_id, due_date_for(requested_at), false)
}

/// 純粋関数：延滞判定
///
/// 返却期限の当日も延滞として扱う（期限日の0時を過ぎた時点で延滞）。
pub fn is_past_due(loan: &Loan, today: NaiveDate) -> bool {
    !loan.was_returned && loan.due_date <= today
}
