use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Isbn, MemberId};

/// コマンド：書籍を貸し出す
///
/// `requested_at`のUTC日付が貸出日となる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutBook {
    pub member_id: MemberId,
    pub isbn: Isbn,
    pub requested_at: DateTime<Utc>,
}
