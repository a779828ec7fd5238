pub mod answer;
pub mod medication;
pub mod record;
pub mod response;
pub mod section;
