use std::sync::Arc;

use crate::application::errors::AppError;
use crate::domain::entities::{
    CallContext, CallRequest, CallResponse, Command, ScopeKey, User, WelcomeMessage,
};
use crate::domain::traits::Platform;
use super::WelcomeMessageRepository;

/// Routes each command to its handler. Holds no per-call state.
pub struct CommandDispatcher {
    platform: Arc<dyn Platform>,
}

impl CommandDispatcher {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self { platform }
    }

    /// Run a command and fold any error into a user-facing response
    pub async fn dispatch(&self, command: Command, call: &CallRequest) -> CallResponse {
        match self.execute(command, call).await {
            Ok(response) => response,
            Err(e) => {
                if let AppError::Failure { .. } = e {
                    tracing::error!(%command, "{}", e);
                } else {
                    tracing::info!(%command, "Rejected: {}", e);
                }
                CallResponse::error(e.user_message())
            }
        }
    }

    pub async fn execute(&self, command: Command, call: &CallRequest) -> Result<CallResponse, AppError> {
        tracing::debug!(
            %command,
            channel = call.context.channel_id().unwrap_or("-"),
            user = call.context.acting_user_id().unwrap_or("-"),
            "Handling command"
        );

        match command {
            Command::Help => Ok(self.help(&call.context).await),
            Command::List => self.list(&call.context).await,
            Command::Preview => self.preview(call),
            Command::SetChannelWelcome => self.set_channel_welcome(call).await,
            Command::GetChannelWelcome => self.get_channel_welcome(&call.context).await,
            Command::DeleteChannelWelcome => self.delete_channel_welcome(&call.context).await,
        }
    }

    async fn help(&self, context: &CallContext) -> CallResponse {
        let text = help_text();

        if let Some(user_id) = context.acting_user_id() {
            match self.platform.bot(context) {
                Ok(bot) => {
                    if let Err(e) = bot.send_direct_message(user_id, &text).await {
                        tracing::warn!("Failed to DM help to {}: {}", user_id, e);
                    }
                }
                Err(e) => tracing::debug!("Skipping help DM: {}", e),
            }
        }

        CallResponse::text(text)
    }

    async fn list(&self, context: &CallContext) -> Result<CallResponse, AppError> {
        let scope = channel_scope(context)?;
        let found = self
            .repository(context, "read")?
            .get(&scope)
            .await
            .map_err(AppError::failure("read"))?;

        let text = match found {
            Some(_) => format!(
                "This channel has a welcome message. Use `/{} {}` to view it.",
                Command::TRIGGER,
                Command::GetChannelWelcome
            ),
            None => not_configured_text(),
        };
        Ok(CallResponse::text(text))
    }

    fn preview(&self, call: &CallRequest) -> Result<CallResponse, AppError> {
        let team = call
            .values
            .team_name()
            .or_else(|| call.context.team_label())
            .ok_or_else(|| AppError::missing_field("team_name"))?;

        let user = call
            .context
            .acting_user
            .clone()
            .or_else(|| call.context.acting_user_id().map(User::new));

        Ok(CallResponse::text(render_preview(team, user.as_ref())))
    }

    async fn set_channel_welcome(&self, call: &CallRequest) -> Result<CallResponse, AppError> {
        let scope = writable_channel_scope(&call.context)?;
        let text = call
            .values
            .message()
            .ok_or_else(|| AppError::missing_field("message"))?;
        let team = call.values.team_name().or_else(|| call.context.team_label());

        self.repository(&call.context, "set")?
            .set(&WelcomeMessage::new(scope.clone(), text))
            .await
            .map_err(AppError::failure("set"))?;

        tracing::info!(channel = %scope, "Welcome message set");

        let text = match team {
            Some(team) => format!(
                "The welcome message for this channel in team **{}** has been set.",
                team
            ),
            None => "The welcome message for this channel has been set.".to_string(),
        };
        Ok(CallResponse::text(text))
    }

    async fn get_channel_welcome(&self, context: &CallContext) -> Result<CallResponse, AppError> {
        let scope = channel_scope(context)?;
        let found = self
            .repository(context, "read")?
            .get(&scope)
            .await
            .map_err(AppError::failure("read"))?;

        Ok(CallResponse::text(match found {
            Some(message) => message.text,
            None => not_configured_text(),
        }))
    }

    async fn delete_channel_welcome(&self, context: &CallContext) -> Result<CallResponse, AppError> {
        let scope = channel_scope(context)?;

        self.repository(context, "delete")?
            .delete(&scope)
            .await
            .map_err(AppError::failure("delete"))?;

        tracing::info!(channel = %scope, "Welcome message deleted");
        Ok(CallResponse::text(
            "The welcome message for this channel has been deleted.",
        ))
    }

    fn repository(
        &self,
        context: &CallContext,
        action: &'static str,
    ) -> Result<WelcomeMessageRepository, AppError> {
        self.platform
            .store(context)
            .map(WelcomeMessageRepository::new)
            .map_err(AppError::failure(action))
    }
}

fn channel_scope(context: &CallContext) -> Result<ScopeKey, AppError> {
    context
        .channel_id()
        .map(ScopeKey::for_channel)
        .ok_or_else(|| AppError::missing_field("context.channel_id"))
}

/// A channel whose type isn't known to be public or private is refused
fn writable_channel_scope(context: &CallContext) -> Result<ScopeKey, AppError> {
    let scope = channel_scope(context)?;
    match context.channel_type() {
        Some(channel_type) if channel_type.accepts_welcome() => Ok(scope),
        _ => Err(AppError::InvalidScope(
            "Welcome messages can't be set in direct or group messages. \
             Run this command from a public or private channel."
                .to_string(),
        )),
    }
}

/// Usage text listing every command
pub fn help_text() -> String {
    let mut help = "Welcome Bot commands:\n".to_string();
    for command in Command::ALL {
        let usage = command
            .usage()
            .map(|u| format!(" {}", u))
            .unwrap_or_default();
        help.push_str(&format!(
            "  /{} {}{} - {}\n",
            Command::TRIGGER,
            command,
            usage,
            command.description()
        ));
    }
    help
}

pub fn not_configured_text() -> String {
    format!(
        "No welcome message is configured for this channel. \
         You need to set one with `/{} {}`.",
        Command::TRIGGER,
        Command::SetChannelWelcome
    )
}

fn render_preview(team: &str, user: Option<&User>) -> String {
    let greeting = match user {
        Some(user) => format!("Welcome to **{}**, {}!", team, user.mention()),
        None => format!("Welcome to **{}**!", team),
    };
    format!(
        "Preview of the welcome message for team **{}**:\n\n{} We're glad you're here.",
        team, greeting
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_command() {
        let text = help_text();
        for command in Command::ALL {
            assert!(text.contains(command.name()), "missing {}", command);
        }
        assert_eq!(text.lines().count(), Command::ALL.len() + 1);
    }

    #[test]
    fn preview_uses_mention_when_known() {
        let user = User::new("u1").with_username("jdoe");
        let text = render_preview("Acme", Some(&user));
        assert!(text.contains("Welcome to **Acme**, @jdoe!"));
    }

    #[test]
    fn writable_scope_requires_known_channel_type() {
        let bare = CallContext {
            channel_id: Some("c1".into()),
            ..CallContext::default()
        };
        assert!(matches!(
            writable_channel_scope(&bare),
            Err(AppError::InvalidScope(_))
        ));

        let call = CallRequest::from_body(br#"{"context": {"channel": {"id": "c1", "type": "P"}}}"#)
            .unwrap();
        assert_eq!(
            writable_channel_scope(&call.context).unwrap(),
            ScopeKey::for_channel("c1")
        );
    }

    #[test]
    fn preview_without_user() {
        assert!(render_preview("Acme", None).contains("Welcome to **Acme**!"));
    }
}
