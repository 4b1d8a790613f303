/// Summary fields the prompt templates need. Keeping this a plain struct of
/// strings decouples the client crate from the domain model.
#[derive(Debug, Clone)]
pub struct CommissionBrief {
    pub client_name: String,
    pub title: String,
    pub status: String,
    pub category: String,
    pub description: String,
}

/// Prompt for a short, polite progress-report message to the client.
pub fn client_update(brief: &CommissionBrief) -> String {
    format!(
        "You are the assistant of a professional freelance writer \
         (novelist/scriptwriter).\n\
         Write a short, polite progress update addressed to the client \
         \"{client}\".\n\
         \n\
         Commission details:\n\
         - Title: {title}\n\
         - Current status: {status}\n\
         - Category: {category}\n\
         \n\
         Keep the tone warm but professional.\n\
         Mention that the \"{status}\" stage (e.g. outline, first draft, \
         polish) is going well.\n\
         If the status is \"not_started\", thank them for their patience in \
         the queue.\n\
         If the status is \"completed\", let them know the files are ready \
         for review.\n\
         Keep it under 100 words.",
        client = brief.client_name,
        title = brief.title,
        status = brief.status,
        category = brief.category,
    )
}

/// Prompt for three concrete next-step suggestions for the writer.
pub fn work_plan(brief: &CommissionBrief) -> String {
    format!(
        "I am a freelance prose writer. For the commission below, give me a \
         list of 3 concrete next writing or working steps.\n\
         \n\
         Commission category: {category}\n\
         Description: {description}\n\
         Current stage: {status}\n\
         \n\
         Give exactly 3 short, actionable bullet points that move the piece \
         to its next stage (e.g. gather material, outline, first draft, \
         polish the prose).",
        category = brief.category,
        description = brief.description,
        status = brief.status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> CommissionBrief {
        CommissionBrief {
            client_name: "StoryLover99".to_string(),
            title: "Forest opening".to_string(),
            status: "in_progress".to_string(),
            category: "standard".to_string(),
            description: "An elven ranger lost in the rain.".to_string(),
        }
    }

    #[test]
    fn client_update_names_client_and_commission() {
        let prompt = client_update(&brief());
        assert!(prompt.contains("StoryLover99"));
        assert!(prompt.contains("Forest opening"));
        assert!(prompt.contains("in_progress"));
        assert!(prompt.contains("under 100 words"));
    }

    #[test]
    fn work_plan_includes_description_and_stage() {
        let prompt = work_plan(&brief());
        assert!(prompt.contains("elven ranger"));
        assert!(prompt.contains("in_progress"));
        assert!(prompt.contains("3"));
    }
}
