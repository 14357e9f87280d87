pub mod prompts;
pub mod render;

pub use prompts::{
    collect_user_session, prompt_body_metrics, prompt_caloric_adjustment, prompt_goal,
    prompt_snacks, prompt_training_days, prompt_yes_no,
};
pub use render::display_weekly_plan;
