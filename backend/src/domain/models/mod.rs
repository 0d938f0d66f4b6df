pub mod payment;
pub mod student;

pub use payment::{Payment, PaymentId};
pub use student::{NewStudent, Student, StudentId, StudentLedger, StudentView};
