//! Admin flows: reload, add, delete and the interactive menu.

use domain_users::User;

use crate::client::UsersClient;
use crate::form::UserForm;
use crate::prompt::Prompter;
use crate::view::{EMPTY, UsersView};

pub const CONFIRM_DELETE: &str = "¿Estás seguro de eliminar este usuario?";

const MENU: [&str; 4] = ["Agregar usuario", "Eliminar usuario", "Recargar", "Salir"];

pub struct AdminApp<P> {
    client: UsersClient,
    view: UsersView,
    prompter: P,
}

impl<P: Prompter> AdminApp<P> {
    pub fn new(client: UsersClient, prompter: P) -> Self {
        Self {
            client,
            view: UsersView::default(),
            prompter,
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> &UsersView {
        &self.view
    }

    /// Fetch the list and print the table.
    pub async fn reload(&mut self) {
        self.view.begin_loading();
        eprintln!("{}", self.view.render());

        let result = self.client.list().await;
        self.view.finish(result);
        println!("{}", self.view.render());
    }

    /// Create a user, prompting for any field not given.
    ///
    /// Returns `None` when the form is rejected locally; no request is sent.
    pub async fn add(
        &mut self,
        name: Option<String>,
        email: Option<String>,
    ) -> eyre::Result<Option<User>> {
        let name = match name {
            Some(name) => name,
            None => self.prompter.text("Nombre")?,
        };
        let email = match email {
            Some(email) => email,
            None => self.prompter.text("Email")?,
        };

        let input = match UserForm::new(name, email).validate() {
            Ok(input) => input,
            Err(e) => {
                eprintln!("{e}");
                return Ok(None);
            }
        };

        let user = self
            .client
            .create(&input)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error creating user"))?;
        println!("Usuario #{} creado", user.id);

        self.reload().await;
        Ok(Some(user))
    }

    /// Delete a user after confirmation.
    ///
    /// Returns `false` when the confirmation is declined; no request is sent.
    pub async fn delete(&mut self, id: i32, assume_yes: bool) -> eyre::Result<bool> {
        if !assume_yes && !self.prompter.confirm(CONFIRM_DELETE)? {
            return Ok(false);
        }

        let message = self
            .client
            .delete(id)
            .await
            .inspect_err(|e| tracing::error!(user_id = id, error = %e, "Error deleting user"))?;
        println!("{message}");

        self.reload().await;
        Ok(true)
    }

    pub async fn run_interactive(&mut self) -> eyre::Result<()> {
        let menu: Vec<String> = MENU.iter().map(|item| item.to_string()).collect();

        self.reload().await;

        loop {
            match self.prompter.select("¿Qué deseas hacer?", &menu)? {
                0 => {
                    if let Err(e) = self.add(None, None).await {
                        eprintln!("{e}");
                    }
                }
                1 => {
                    let Some(id) = self.pick_user()? else {
                        continue;
                    };
                    if let Err(e) = self.delete(id, false).await {
                        eprintln!("{e}");
                    }
                }
                2 => self.reload().await,
                _ => break,
            }
        }

        Ok(())
    }

    fn pick_user(&mut self) -> eyre::Result<Option<i32>> {
        let users = self.view.users();
        if users.is_empty() {
            println!("{EMPTY}");
            return Ok(None);
        }

        let mut labels: Vec<String> = users
            .iter()
            .map(|u| format!("#{} {} <{}>", u.id, u.name, u.email))
            .collect();
        labels.push("Cancelar".to_string());

        let choice = self.prompter.select("Usuario a eliminar", &labels)?;
        Ok(users.get(choice).map(|u| u.id))
    }
}
