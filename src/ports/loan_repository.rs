use crate::domain::loan::Loan;
use crate::domain::value_objects::{CopyId, Isbn, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出リポジトリポート
///
/// 貸出記録の永続化と、貸出判定に必要な問い合わせを抽象化する。
/// 公開する操作はこの3つのみ（貸出IDの採番や更新操作は持たない）。
///
/// # 実装への要求
///
/// `try_create_loan`は単一の原子的な条件付き書き込みとして実装すること。
/// 「空きを確認してから書き込む」という2段階の実装は並行貸出で同じ蔵書を
/// 二重に貸し出すため不可。
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// 会員の未返却の貸出を取得する
    ///
    /// `was_returned = false`の貸出のみを返す。順序は問わない。
    async fn get_outstanding_loans(&self, member_id: &MemberId) -> Result<Vec<Loan>>;

    /// 貸出可能と思われる蔵書IDを取得する
    ///
    /// 返された順序で貸出を試行する。空の場合もある。
    /// 取得後に他の処理が同じ蔵書を確保している可能性がある（古い情報でもよい）。
    async fn get_available_copy_ids(&self, isbn: &Isbn) -> Result<Vec<CopyId>>;

    /// 貸出を条件付きで作成する
    ///
    /// 対象の蔵書に未返却の貸出が存在しない場合に限り保存し、`true`を返す。
    /// 既に貸出中の場合は何も保存せず`false`を返す。
    /// 同じ蔵書に対する任意の並行呼び出しで、成功するのは高々1つ。
    async fn try_create_loan(&self, loan: &Loan) -> Result<bool>;
}
