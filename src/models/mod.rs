pub mod activity;
pub mod feedback;
pub mod mutation;
