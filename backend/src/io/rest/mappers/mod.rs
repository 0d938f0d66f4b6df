pub mod payment_mapper;
pub mod student_mapper;
