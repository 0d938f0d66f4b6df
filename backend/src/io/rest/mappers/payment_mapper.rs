use crate::domain::commands::RecordPaymentCommand;
use crate::domain::models::{Payment, StudentId};
use crate::domain::validation::format_date;
use shared::{PaymentDto, RecordPaymentRequest};

/// Mapper between payment DTOs and domain models.
pub struct PaymentMapper;

impl PaymentMapper {
    pub fn to_dto(payment: Payment) -> PaymentDto {
        PaymentDto {
            id: payment.id,
            student_id: payment.student_id,
            paid_till: format_date(payment.paid_till),
        }
    }

    pub fn to_record_command(student_id: StudentId, request: RecordPaymentRequest) -> RecordPaymentCommand {
        RecordPaymentCommand {
            student_id,
            paid_till: request.paid_till,
        }
    }
}
