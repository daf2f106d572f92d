//! Action dispatcher: the single control point for signup and unregister.

use crate::board::refresh;
use crate::client::ActivityApi;
use crate::errors::ClientError;
use crate::models::{ActionReply, Command, Outcome};
use crate::view::{ActivitySelect, Page, Prompt, StatusKind};
use tracing::{info, warn};

pub const FALLBACK_ERROR: &str = "An error occurred";

pub async fn dispatch<A, P>(api: &A, page: &mut Page, prompt: &mut P, command: Command) -> Outcome
where
    A: ActivityApi,
    P: Prompt,
{
    match command {
        Command::SubmitSignup { activity, email } => submit_signup(api, page, &activity, &email).await,
        Command::SubmitUnregister { activity, email } => {
            submit_unregister(api, page, prompt, &activity, &email).await
        }
    }
}

pub async fn submit_signup<A: ActivityApi>(
    api: &A,
    page: &mut Page,
    activity: &str,
    email: &str,
) -> Outcome {
    if let Some(reason) = rejected_selection(&page.signup_form.activity, activity) {
        warn!("signup rejected before sending: {reason}");
        page.message.show(reason.clone(), StatusKind::Error);
        return Outcome::Failure(reason);
    }

    match interpret(api.signup(activity, email).await) {
        Ok(text) => {
            info!("signed up {email} for {activity}");
            page.message.show(text.clone(), StatusKind::Success);
            refresh(api, page).await;
            page.signup_form.reset();
            Outcome::Success(text)
        }
        Err(text) => {
            warn!("signup for {activity} failed: {text}");
            page.message.show(text.clone(), StatusKind::Error);
            Outcome::Failure(text)
        }
    }
}

pub async fn submit_unregister<A, P>(
    api: &A,
    page: &mut Page,
    prompt: &mut P,
    activity: &str,
    email: &str,
) -> Outcome
where
    A: ActivityApi,
    P: Prompt,
{
    let question = confirm_question(activity, email);
    if !prompt.confirm(&question) {
        info!("unregister of {email} from {activity} declined");
        return Outcome::Declined;
    }

    match interpret(api.unregister(activity, email).await) {
        Ok(text) => {
            info!("unregistered {email} from {activity}");
            refresh(api, page).await;
            Outcome::Success(text)
        }
        Err(text) => {
            warn!("unregister from {activity} failed: {text}");
            page.alert.raise(text.clone());
            Outcome::Failure(text)
        }
    }
}

pub fn confirm_question(activity: &str, email: &str) -> String {
    format!("Are you sure you want to unregister {email} from {activity}?")
}

// Ok carries the server's message, Err the text to show the user.
fn interpret(reply: Result<ActionReply, ClientError>) -> Result<String, String> {
    match reply {
        Ok(reply) if reply.ok => Ok(reply.result.message.unwrap_or_default()),
        Ok(reply) => Err(reply
            .result
            .detail
            .unwrap_or_else(|| FALLBACK_ERROR.to_string())),
        Err(err) => Err(err.to_string()),
    }
}

// Guards against submitting a name the latest catalog no longer lists.
fn rejected_selection(select: &ActivitySelect, activity: &str) -> Option<String> {
    if activity.is_empty() {
        return Some("Please select an activity".to_string());
    }
    if !select.contains(activity) {
        return Some(format!("Activity \"{activity}\" is no longer available"));
    }
    None
}
