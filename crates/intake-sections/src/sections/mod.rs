pub mod adl;
pub mod cognitive;
pub mod demographics;
pub mod iadl;
pub mod medical_history;
pub mod medications;
pub mod symptoms;
