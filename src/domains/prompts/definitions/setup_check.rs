//! Installation check prompt.

use super::PromptDefinition;

pub struct SetupCheckPrompt;

impl PromptDefinition for SetupCheckPrompt {
    const NAME: &'static str = "setup_check";
    const DESCRIPTION: &'static str =
        "Check if Taskwarrior and Timewarrior are correctly installed and configured.";

    fn template() -> &'static str {
        "Please run `task_raw` with command '--version' and `timew_raw` with command \
         '--version' to verify the installation. If either fails, run `task_diagnostics` \
         and explain what is missing."
    }
}
