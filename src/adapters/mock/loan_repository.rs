use crate::domain::loan::Loan;
use crate::domain::value_objects::{CopyId, Isbn, MemberId};
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Store {
    /// ISBNごとの蔵書（登録順）
    copies: HashMap<Isbn, Vec<CopyId>>,
    loans: Vec<Loan>,
}

impl Store {
    fn is_on_loan(&self, isbn: &Isbn, copy_id: &CopyId) -> bool {
        self.loans
            .iter()
            .any(|l| !l.was_returned() && l.isbn() == isbn && l.copy_id() == copy_id)
    }
}

/// LoanRepositoryのインメモリ実装
///
/// 蔵書と貸出を1つのMutexで保護する。`try_create_loan`は確認と追加を
/// 同じロックの中で行うため原子的に動作する。
/// DATABASE_URL未設定時の開発用ストレージおよびテストで使用する。
pub struct LoanRepository {
    store: Mutex<Store>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
        }
    }

    /// 蔵書を登録する
    pub fn add_copy(&self, isbn: Isbn, copy_id: CopyId) {
        let mut store = self.store.lock().unwrap();
        let copies = store.copies.entry(isbn).or_default();
        if !copies.contains(&copy_id) {
            copies.push(copy_id);
        }
    }

    /// 既存の貸出を登録する（テストデータの準備用）
    pub fn add_loan(&self, loan: Loan) {
        self.store.lock().unwrap().loans.push(loan);
    }

    /// 保存されているすべての貸出
    pub fn loans(&self) -> Vec<Loan> {
        self.store.lock().unwrap().loans.clone()
    }
}

impl Default for LoanRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn get_outstanding_loans(&self, member_id: &MemberId) -> Result<Vec<Loan>> {
        let store = self.store.lock().unwrap();
        Ok(store
            .loans
            .iter()
            .filter(|l| l.member_id() == member_id && !l.was_returned())
            .cloned()
            .collect())
    }

    async fn get_available_copy_ids(&self, isbn: &Isbn) -> Result<Vec<CopyId>> {
        let store = self.store.lock().unwrap();
        Ok(store
            .copies
            .get(isbn)
            .map(|copies| {
                copies
                    .iter()
                    .filter(|copy_id| !store.is_on_loan(isbn, copy_id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn try_create_loan(&self, loan: &Loan) -> Result<bool> {
        let mut store = self.store.lock().unwrap();
        if store.is_on_loan(loan.isbn(), loan.copy_id()) {
            return Ok(false);
        }
        store.loans.push(loan.clone());
        Ok(true)
    }
}
