//! Users directory screens as one-shot commands.

use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::runtime::Handle;

use crate::navigation::UsersRoute;
use crate::persistence::{
    persist_users_on_change, KeyValueStorage, PersistQueue, UsersRepository,
};
use crate::remote::UserSource;
use crate::scope::ScreenScope;
use crate::store::{Store, Subscription};
use crate::users::{
    init_users, submit_user, BootstrapOutcome, User, UserForm, UsersAction, UsersAppReducer,
    UsersView,
};

/// One users screen invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersCommand {
    List,
    Show { id: i64 },
    Add(UserForm),
    Delete { id: i64 },
}

impl UsersCommand {
    /// The screen this command stands for.
    pub fn route(&self) -> UsersRoute {
        match self {
            Self::List | Self::Delete { .. } => UsersRoute::UserList,
            Self::Show { id } => UsersRoute::UserDetail { user_id: *id },
            Self::Add(_) => UsersRoute::AddUser,
        }
    }
}

/// A users store wired to storage, with persistence on change.
pub struct UsersApp {
    store: Store<UsersAppReducer>,
    repository: UsersRepository,
    queue: Arc<PersistQueue>,
    _persist: Subscription,
}

impl UsersApp {
    /// Must be called from within a tokio runtime.
    pub fn open(storage: Arc<dyn KeyValueStorage>, users_key: &str) -> Self {
        let store = Store::<UsersAppReducer>::default();
        let repository = UsersRepository::new(Arc::clone(&storage), users_key);
        let queue = Arc::new(PersistQueue::new(storage, Handle::current()));
        let persist = persist_users_on_change(&store, repository.clone(), Arc::clone(&queue));
        Self {
            store,
            repository,
            queue,
            _persist: persist,
        }
    }

    /// Bootstrap the list, run `command`, and wait for pending writes.
    pub async fn execute<S: UserSource>(
        &self,
        command: UsersCommand,
        source: &S,
        out: &mut impl Write,
    ) -> Result<()> {
        let route = command.route();
        tracing::debug!(route = route.name(), "Opening users screen");

        let scope = ScreenScope::new(route.name());
        let outcome = init_users(&self.store, &self.repository, source, &scope.handle()).await;
        if outcome == BootstrapOutcome::Cancelled {
            return Ok(());
        }

        let result = self.render(command, out);
        self.queue.flush().await;
        result
    }

    fn render(&self, command: UsersCommand, out: &mut impl Write) -> Result<()> {
        if let UsersView::Error(message) = self.store.get_state().view() {
            bail!("{message}");
        }

        match command {
            UsersCommand::List => {
                let users = self.store.select(|s| s.users.list.clone());
                if users.is_empty() {
                    writeln!(out, "No users.")?;
                }
                for user in &users {
                    writeln!(out, "{:>14}  {}  <{}>", user.id, user.name, user.email)?;
                }
            }
            UsersCommand::Show { id } => {
                let Some(user) = self.store.select(|s| s.find_user(id).cloned()) else {
                    bail!("User not found.");
                };
                write_detail(out, &user)?;
            }
            UsersCommand::Add(form) => match submit_user(&self.store, &form) {
                Ok((user, _)) => writeln!(out, "Added {} (id {})", user.name, user.id)?,
                Err(errors) => bail!("{}", errors.messages().join(" ")),
            },
            UsersCommand::Delete { id } => {
                if self.store.select(|s| s.find_user(id).is_none()) {
                    writeln!(out, "No user with id {id}.")?;
                } else {
                    self.store.dispatch(UsersAction::DeleteUser(id).into());
                    writeln!(out, "Deleted user {id}.")?;
                }
            }
        }
        Ok(())
    }
}

fn write_detail(out: &mut impl Write, user: &User) -> Result<()> {
    writeln!(out, "{}", user.name)?;
    writeln!(out, "  Email    {}", user.email)?;
    writeln!(out, "  Phone    {}", user.phone)?;
    writeln!(out, "  Website  {}", user.website)?;
    Ok(())
}
