pub mod clinical_input;
pub mod diagnosis;
pub mod patient;
