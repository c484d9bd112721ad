use crate::domain::entities::{Binding, Call, CallResponse, Command, Expand, Field, Form};

/// Location of the slash-command menu
pub const COMMAND_LOCATION: &str = "/command";

pub const APP_ICON: &str = "icon.png";

const FORM_TITLE: &str = "Welcome Bot";

/// The command menu and forms presented to users. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct BindingCatalog {
    bindings: Vec<Binding>,
}

impl BindingCatalog {
    pub fn new() -> Self {
        let hint = format!(
            "[{}]",
            Command::ALL
                .iter()
                .map(Command::name)
                .collect::<Vec<_>>()
                .join("|")
        );

        let top = Binding {
            icon: Some(APP_ICON.to_string()),
            label: Some(Command::TRIGGER.to_string()),
            description: Some("Welcome Bot app".to_string()),
            hint: Some(hint),
            bindings: Command::ALL.into_iter().map(command_binding).collect(),
            ..Binding::default()
        };

        Self {
            bindings: vec![Binding {
                location: Some(COMMAND_LOCATION.to_string()),
                bindings: vec![top],
                ..Binding::default()
            }],
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Data response carrying the bindings, as served on `/bindings`
    pub fn response(&self) -> Result<CallResponse, serde_json::Error> {
        Ok(CallResponse::data(serde_json::to_value(&self.bindings)?))
    }
}

impl Default for BindingCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn submit(command: Command) -> Call {
    Call::new(command.path()).with_expand(Expand::summaries())
}

fn team_name_field() -> Field {
    Field::text("team_name")
        .with_label("team-name")
        .with_hint("Team name")
        .with_description("Name of the team the welcome message belongs to")
        .at_position(1)
}

fn command_binding(command: Command) -> Binding {
    let mut binding = Binding {
        label: Some(command.name().to_string()),
        description: Some(command.description().to_string()),
        hint: command.usage().map(str::to_string),
        ..Binding::default()
    };

    match command {
        Command::Preview => {
            binding.form = Some(Form {
                title: FORM_TITLE.to_string(),
                icon: Some(APP_ICON.to_string()),
                fields: vec![team_name_field()],
                submit: submit(command),
            });
        }
        Command::SetChannelWelcome => {
            binding.form = Some(Form {
                title: FORM_TITLE.to_string(),
                icon: Some(APP_ICON.to_string()),
                fields: vec![
                    team_name_field(),
                    Field::text("message")
                        .with_label("message")
                        .with_hint("Welcome text")
                        .with_description("Message shown to users joining this channel")
                        .required(),
                ],
                submit: submit(command),
            });
        }
        _ => binding.submit = Some(submit(command)),
    }

    binding
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(catalog: &BindingCatalog) -> &[Binding] {
        &catalog.bindings()[0].bindings[0].bindings
    }

    #[test]
    fn declares_all_six_commands_under_command_location() {
        let catalog = BindingCatalog::new();
        assert_eq!(catalog.bindings().len(), 1);
        assert_eq!(catalog.bindings()[0].location.as_deref(), Some(COMMAND_LOCATION));

        let labels: Vec<_> = leaves(&catalog)
            .iter()
            .filter_map(|b| b.label.as_deref())
            .collect();
        assert_eq!(
            labels,
            vec![
                "help",
                "list",
                "preview",
                "set_channel_welcome",
                "get_channel_welcome",
                "delete_channel_welcome"
            ]
        );
    }

    #[test]
    fn forms_declare_their_fields() {
        let catalog = BindingCatalog::new();
        let leaves = leaves(&catalog);

        let preview = leaves[2].form.as_ref().unwrap();
        assert_eq!(preview.submit.path, "/preview");
        assert_eq!(preview.fields.len(), 1);
        assert_eq!(preview.fields[0].name, "team_name");

        let set = leaves[3].form.as_ref().unwrap();
        assert_eq!(set.submit.path, "/set_channel_welcome");
        let names: Vec<_> = set.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["team_name", "message"]);
        assert!(set.fields[1].is_required);
    }

    #[test]
    fn plain_commands_submit_directly() {
        let catalog = BindingCatalog::new();
        let help = &leaves(&catalog)[0];
        assert!(help.form.is_none());
        assert_eq!(help.submit.as_ref().unwrap().path, "/help");
    }

    #[test]
    fn response_serializes_to_platform_shape() {
        let response = BindingCatalog::new().response().unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["type"], "ok");
        let top = &json["data"][0]["bindings"][0];
        assert_eq!(top["label"], "welcomebot");
        assert_eq!(top["bindings"][3]["form"]["fields"][1]["type"], "text");
        assert_eq!(top["bindings"][0]["submit"]["expand"]["channel"], "summary");
    }
}
