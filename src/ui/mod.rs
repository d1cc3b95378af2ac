pub mod feedback;
pub mod messages;
