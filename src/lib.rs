pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{PlanError, Result};
pub use models::{UserSession, WeeklyPlan};
