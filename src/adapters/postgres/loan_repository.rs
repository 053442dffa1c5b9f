use crate::domain::loan::Loan;
use crate::domain::value_objects::{CopyId, Isbn, MemberId};
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをLoanに変換する
fn map_row_to_loan(row: &PgRow) -> Loan {
    Loan::new(
        MemberId::new(row.get::<String, _>("member_id")),
        Isbn::new(row.get::<String, _>("isbn")),
        CopyId::new(row.get::<String, _>("copy_id")),
        row.get("due_date"),
        row.get("was_returned"),
    )
}

/// LoanRepositoryのPostgreSQL実装
///
/// `loans_live_copy_idx`（未返却の貸出に対する(isbn, copy_id)の部分ユニーク
/// インデックス）により、`try_create_loan`は1文のINSERTで原子的に動作する。
pub struct LoanRepository {
    pool: PgPool,
}

impl LoanRepository {
    /// PostgreSQLコネクションプールから新しいLoanRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 蔵書を登録する（既に存在する場合は何もしない）
    pub async fn add_copy(&self, isbn: &Isbn, copy_id: &CopyId) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO book_copies (isbn, copy_id)
            VALUES ($1, $2)
            ON CONFLICT (isbn, copy_id) DO NOTHING
            "#,
        )
        .bind(isbn.as_str())
        .bind(copy_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    /// 会員の未返却の貸出を取得（貸出上限・延滞確認用）
    ///
    /// (member_id)の部分インデックスを使用する。
    async fn get_outstanding_loans(&self, member_id: &MemberId) -> Result<Vec<Loan>> {
        let rows = sqlx::query(
            r#"
            SELECT
                member_id,
                isbn,
                copy_id,
                due_date,
                was_returned
            FROM loans
            WHERE member_id = $1 AND NOT was_returned
            "#,
        )
        .bind(member_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_loan).collect())
    }

    /// 未返却の貸出がない蔵書をcopy_id順に取得
    async fn get_available_copy_ids(&self, isbn: &Isbn) -> Result<Vec<CopyId>> {
        let copy_ids: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT c.copy_id
            FROM book_copies c
            WHERE c.isbn = $1
              AND NOT EXISTS (
                  SELECT 1
                  FROM loans l
                  WHERE l.isbn = c.isbn
                    AND l.copy_id = c.copy_id
                    AND NOT l.was_returned
              )
            ORDER BY c.copy_id ASC
            "#,
        )
        .bind(isbn.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(copy_ids.into_iter().map(CopyId::new).collect())
    }

    /// 貸出を条件付きで作成
    ///
    /// ON CONFLICT DO NOTHINGで競合時は0行となり、確保失敗を表す。
    async fn try_create_loan(&self, loan: &Loan) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO loans (member_id, isbn, copy_id, due_date, was_returned)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (isbn, copy_id) WHERE NOT was_returned
            DO NOTHING
            "#,
        )
        .bind(loan.member_id().as_str())
        .bind(loan.isbn().as_str())
        .bind(loan.copy_id().as_str())
        .bind(loan.due_date())
        .bind(loan.was_returned())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
