/// 貸出資格のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityError {
    /// 未返却の貸出が上限に達している
    TooManyCheckedOutBooks,
    /// 返却期限を過ぎた貸出がある
    PastDueBooks,
}
