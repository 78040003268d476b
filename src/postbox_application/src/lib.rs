pub mod use_cases;

pub use use_cases::send_email::{DispatchError, DispatchOptions, SendEmailUseCase};
