mod checkout_service;
mod copy_allocator;
mod eligibility_checker;
mod errors;

pub use checkout_service::{ReminderTiming, ServiceDependencies, checkout_book};
pub use copy_allocator::allocate_copy;
pub use eligibility_checker::check_eligibility;
pub use errors::{CheckoutError, Result};
