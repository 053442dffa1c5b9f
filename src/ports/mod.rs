pub mod loan_repository;
pub mod reminder_service;

pub use loan_repository::LoanRepository;
pub use reminder_service::ReminderService;
