use crate::domain::commands::AddStudentCommand;
use crate::domain::models::{StudentLedger, StudentView};
use crate::domain::validation::format_date;
use shared::{CreateStudentRequest, StudentDto, StudentPaymentsResponse};

use super::payment_mapper::PaymentMapper;

/// Mapper between student DTOs and domain models.
pub struct StudentMapper;

impl StudentMapper {
    pub fn to_dto(view: StudentView) -> StudentDto {
        let StudentView {
            student,
            latest_paid_till,
            pending,
        } = view;

        StudentDto {
            id: student.id,
            name: student.name,
            address: student.address,
            phone: student.phone,
            admission_date: format_date(student.admission_date),
            admission_cancel_date: student.admission_cancel_date.map(format_date),
            monthly_fee: student.monthly_fee,
            paid_till: latest_paid_till.map(format_date),
            pending_months: pending.months,
            pending_amount: pending.amount,
        }
    }

    pub fn to_dto_list(views: Vec<StudentView>) -> Vec<StudentDto> {
        views.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_add_command(request: CreateStudentRequest) -> AddStudentCommand {
        AddStudentCommand {
            name: request.name,
            address: request.address,
            phone: request.phone,
            admission_date: request.admission_date,
            admission_cancel_date: request.admission_cancel_date,
            initial_paid_till: request.initial_paid_till,
            monthly_fee: request.monthly_fee.map(|fee| fee.to_string()),
        }
    }

    pub fn to_payments_response(ledger: StudentLedger) -> StudentPaymentsResponse {
        let pending = ledger.view.pending;

        StudentPaymentsResponse {
            student: Self::to_dto(ledger.view),
            payments: ledger.payments.into_iter().map(PaymentMapper::to_dto).collect(),
            pending_months: pending.months,
            pending_amount: pending.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Student;
    use crate::domain::PendingFees;
    use chrono::NaiveDate;
    use shared::FeeInput;

    #[test]
    fn test_to_dto_formats_dates() {
        let view = StudentView {
            student: Student {
                id: 5,
                name: "Bruce Wayne".to_string(),
                address: Some("Batcave".to_string()),
                phone: None,
                admission_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
                admission_cancel_date: None,
                monthly_fee: 2500.0,
            },
            latest_paid_till: None,
            pending: PendingFees { months: 3, amount: 7500.0 },
        };

        let dto = StudentMapper::to_dto(view);

        assert_eq!(dto.admission_date, "2024-06-05");
        assert_eq!(dto.paid_till, None);
        assert_eq!(dto.pending_months, 3);
        assert_eq!(dto.pending_amount, 7500.0);
    }

    #[test]
    fn test_to_add_command_stringifies_fee() {
        let request = CreateStudentRequest {
            name: Some("Alice".to_string()),
            monthly_fee: Some(FeeInput::Number(1500.5)),
            ..Default::default()
        };
        assert_eq!(StudentMapper::to_add_command(request).monthly_fee.as_deref(), Some("1500.5"));

        let request = CreateStudentRequest {
            monthly_fee: Some(FeeInput::Text("abc".to_string())),
            ..Default::default()
        };
        assert_eq!(StudentMapper::to_add_command(request).monthly_fee.as_deref(), Some("abc"));
    }
}
