//! Daily planning prompt.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Reviews pending tasks and recent time tracking, then proposes a plan.
pub struct DailyPlannerPrompt;

impl PromptDefinition for DailyPlannerPrompt {
    const NAME: &'static str = "daily_planner";
    const DESCRIPTION: &'static str =
        "Prepares a summary of pending tasks and time spent for review.";

    fn template() -> &'static str {
        "Please review my pending tasks using `task_list` and my recent activity using \
         `timew_summary` with range ':week'. \
         {{#if focus}}My primary goal for today is: {{focus}}. Favour tasks that move it forward.\
         {{else}}Favour tasks that are overdue, due soon or high priority.{{/if}} \
         Then suggest a plan for today and ask me to confirm which tasks I should start \
         before calling `task_start`."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "focus".to_string(),
            title: None,
            description: Some("Primary goal for the day".to_string()),
            required: Some(false),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_planner_metadata() {
        assert_eq!(DailyPlannerPrompt::NAME, "daily_planner");
        assert!(DailyPlannerPrompt::template().contains("`task_list`"));
        assert!(DailyPlannerPrompt::template().contains("`timew_summary`"));

        let args = DailyPlannerPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "focus");
        assert_eq!(args[0].required, Some(false));
    }
}
