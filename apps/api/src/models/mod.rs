pub mod skill;
pub mod target_job;
pub mod user;
