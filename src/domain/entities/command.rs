use std::fmt;

/// The slash commands exposed by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    List,
    Preview,
    SetChannelWelcome,
    GetChannelWelcome,
    DeleteChannelWelcome,
}

impl Command {
    /// Top-level slash command the subcommands hang off
    pub const TRIGGER: &'static str = "welcomebot";

    pub const ALL: [Command; 6] = [
        Command::Help,
        Command::List,
        Command::Preview,
        Command::SetChannelWelcome,
        Command::GetChannelWelcome,
        Command::DeleteChannelWelcome,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List => "list",
            Command::Preview => "preview",
            Command::SetChannelWelcome => "set_channel_welcome",
            Command::GetChannelWelcome => "get_channel_welcome",
            Command::DeleteChannelWelcome => "delete_channel_welcome",
        }
    }

    /// Call path the platform posts to
    pub fn path(&self) -> String {
        format!("/{}", self.name())
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Show this help text",
            Command::List => "Show whether this channel has a welcome message",
            Command::Preview => "Preview the welcome message for a team as you would see it",
            Command::SetChannelWelcome => {
                "Set the welcome message for this channel (not available in direct messages)"
            }
            Command::GetChannelWelcome => "Show this channel's welcome message",
            Command::DeleteChannelWelcome => "Delete this channel's welcome message",
        }
    }

    /// Argument synopsis, if the command takes any
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            Command::Preview => Some("[team-name]"),
            Command::SetChannelWelcome => Some("[team-name] --message <text>"),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
