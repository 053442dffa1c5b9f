use crate::domain::loan::Loan;
use crate::ports::reminder_service::{ReminderService as ReminderServiceTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of ReminderService
///
/// Does not deliver anything. Records every scheduled loan and logs it,
/// so orphaned schedules for lost claims stay visible.
pub struct ReminderService {
    scheduled: Mutex<Vec<Loan>>,
}

impl ReminderService {
    pub fn new() -> Self {
        Self {
            scheduled: Mutex::new(Vec::new()),
        }
    }

    /// Loans reminders were scheduled for, in call order
    pub fn scheduled(&self) -> Vec<Loan> {
        self.scheduled.lock().unwrap().clone()
    }
}

impl Default for ReminderService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReminderServiceTrait for ReminderService {
    async fn schedule_reminders(&self, loan: &Loan) -> Result<()> {
        tracing::debug!(
            member_id = %loan.member_id(),
            copy_id = %loan.copy_id(),
            due_date = %loan.due_date(),
            "Reminder scheduled"
        );
        self.scheduled.lock().unwrap().push(loan.clone());
        Ok(())
    }
}
