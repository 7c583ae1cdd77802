//! Line-based front end for the profile wizard.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::navigation::WizardRoute;
use crate::profiles::{Address, BasicInfo, ProfileWizard, UserProfile};
use crate::scope::ScreenScope;

/// Interactive wizard over any line reader and writer.
pub struct WizardSession<R, W> {
    wizard: ProfileWizard,
    input: R,
    output: W,
}

impl<R, W> WizardSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(wizard: ProfileWizard, input: R, output: W) -> Self {
        Self {
            wizard,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut route = Some(WizardRoute::Home);
        while let Some(current) = route {
            if let Some(step) = current.step() {
                self.say(&format!("-- {} --", step)).await?;
            }
            route = match current {
                WizardRoute::Home => self.home().await?,
                WizardRoute::Page1 { .. } => self.page1().await?,
                WizardRoute::Page2 => self.page2().await?,
                WizardRoute::Page3 => self.page3().await?,
            };
        }
        self.output.flush().await
    }

    async fn home(&mut self) -> io::Result<Option<WizardRoute>> {
        let state = self.wizard.store().get_state();
        self.say(&format!("User Profiles: {}", state.summary())).await?;
        if state.profiles.is_empty() {
            self.say("No profiles yet. Add one to get started.").await?;
        }
        for (index, profile) in state.profiles.iter().enumerate() {
            self.say(&format!("  {}. {}", index + 1, describe(profile)))
                .await?;
        }

        let Some(line) = self.ask("[n]ew, [e]dit <#>, [d]elete <#>, [q]uit > ").await? else {
            return Ok(None);
        };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let picked = parts
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| state.profiles.get(i));

        Ok(Some(match (command, picked) {
            ("n" | "new", _) => self.wizard.start_new(),
            ("e" | "edit", Some(profile)) => self.wizard.start_edit(&profile.id),
            ("d" | "delete", Some(profile)) => {
                self.wizard.delete(&profile.id);
                self.say(&format!("Deleted {}'s profile.", profile.full_name))
                    .await?;
                WizardRoute::Home
            }
            ("q" | "quit", _) => return Ok(None),
            _ => {
                self.say("Unknown choice.").await?;
                WizardRoute::Home
            }
        }))
    }

    async fn page1(&mut self) -> io::Result<Option<WizardRoute>> {
        self.say("Basic Information").await?;
        let mut form = self.wizard.basic_info();
        loop {
            let Some(full_name) = self.field("Full Name", &form.full_name).await? else {
                return Ok(None);
            };
            let Some(email) = self.field("Email", &form.email).await? else {
                return Ok(None);
            };
            let Some(age) = self.field("Age", &form.age).await? else {
                return Ok(None);
            };
            form = BasicInfo {
                full_name,
                email,
                age,
            };

            let Some(choice) = self.ask("[n]ext, [c]ancel > ").await? else {
                return Ok(None);
            };
            if matches!(choice.as_str(), "c" | "cancel") {
                return Ok(Some(self.wizard.cancel()));
            }
            match self.wizard.submit_basic_info(form.clone()) {
                Ok(next) => return Ok(Some(next)),
                Err(e) => self.say(&format!("Validation Error: {}", e)).await?,
            }
        }
    }

    async fn page2(&mut self) -> io::Result<Option<WizardRoute>> {
        self.say("Address Information").await?;
        let mut form = self.wizard.address();
        loop {
            let Some(city) = self.field("City", &form.city).await? else {
                return Ok(None);
            };
            let Some(state) = self.field("State", &form.state).await? else {
                return Ok(None);
            };
            let Some(country) = self.field("Country", &form.country).await? else {
                return Ok(None);
            };
            form = Address {
                city,
                state,
                country,
            };

            let Some(choice) = self.ask("[n]ext, [b]ack, [c]ancel > ").await? else {
                return Ok(None);
            };
            match choice.as_str() {
                "b" | "back" => return Ok(Some(self.wizard.back_from_address(form))),
                "c" | "cancel" => return Ok(Some(self.wizard.cancel())),
                _ => match self.wizard.submit_address(form.clone()) {
                    Ok(next) => return Ok(Some(next)),
                    Err(e) => self.say(&format!("Validation Error: {}", e)).await?,
                },
            }
        }
    }

    async fn page3(&mut self) -> io::Result<Option<WizardRoute>> {
        let state = self.wizard.store().get_state();
        let draft = &state.draft;
        self.say("Review & Submit").await?;
        for (label, value) in [
            ("Full Name", &draft.full_name),
            ("Email", &draft.email),
            ("Age", &draft.age),
            ("City", &draft.city),
            ("State", &draft.state),
            ("Country", &draft.country),
        ] {
            self.say(&format!("  {:<10}{}", label, value.as_deref().unwrap_or("")))
                .await?;
        }

        let submit_label = if state.is_editing() {
            "Update Profile"
        } else {
            "Submit"
        };
        let prompt = format!("[s] {}, [e]dit, [c]ancel > ", submit_label);
        let Some(choice) = self.ask(&prompt).await? else {
            return Ok(None);
        };

        match choice.as_str() {
            "s" | "submit" => {
                self.say("Saving profile...").await?;
                let scope = ScreenScope::new("Page3");
                match self.wizard.submit(&scope.handle()).await {
                    Some(outcome) => self.say(outcome.message()).await?,
                    None => self.say("Submission abandoned.").await?,
                }
                Ok(Some(WizardRoute::Home))
            }
            "e" | "edit" => Ok(Some(WizardRoute::Page1 { profile_id: None })),
            "c" | "cancel" => Ok(Some(self.wizard.cancel())),
            _ => {
                self.say("Unknown choice.").await?;
                Ok(Some(WizardRoute::Page3))
            }
        }
    }

    /// Prompt for a field. An empty answer keeps `current`.
    async fn field(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let prompt = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };
        Ok(self.ask(&prompt).await?.map(|answer| {
            if answer.is_empty() {
                current.to_string()
            } else {
                answer
            }
        }))
    }

    /// Write `prompt` and read one line. `None` at end of input.
    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn say(&mut self, line: &str) -> io::Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await
    }
}

fn describe(profile: &UserProfile) -> String {
    format!(
        "{} <{}>, age {}, {}, {}, {}",
        profile.full_name, profile.email, profile.age, profile.city, profile.state, profile.country
    )
}
