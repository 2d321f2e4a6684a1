//! User table state and rendering.

use std::fmt::Write;

use domain_users::User;

use crate::client::ClientError;

pub const LOADING: &str = "Cargando usuarios...";
pub const EMPTY: &str = "No hay usuarios disponibles";

/// Last successfully fetched list plus the loading flag.
///
/// The list is only ever replaced by a successful fetch; creates and deletes
/// show up after the next reload.
#[derive(Debug)]
pub struct UsersView {
    users: Vec<User>,
    loading: bool,
}

impl Default for UsersView {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
        }
    }
}

impl UsersView {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result. Returns whether the list was replaced.
    pub fn finish(&mut self, result: Result<Vec<User>, ClientError>) -> bool {
        self.loading = false;

        match result {
            Ok(users) => {
                self.users = users;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching users");
                false
            }
        }
    }

    pub fn render(&self) -> String {
        if self.is_loading() {
            LOADING.to_string()
        } else {
            render_table(&self.users)
        }
    }
}

pub fn render_table(users: &[User]) -> String {
    let id_width = users
        .iter()
        .map(|u| u.id.to_string().len() + 1)
        .chain([2])
        .max()
        .unwrap_or(2);
    let name_width = users
        .iter()
        .map(|u| u.name.chars().count())
        .chain([6])
        .max()
        .unwrap_or(6);

    let mut out = String::new();
    let _ = writeln!(out, "{:<id_width$}  {:<name_width$}  Email", "ID", "Nombre");
    let _ = writeln!(out, "{}", "-".repeat(id_width + name_width + 4 + 5));

    if users.is_empty() {
        let _ = writeln!(out, "{EMPTY}");
    }
    for user in users {
        let id = format!("#{}", user.id);
        let _ = writeln!(out, "{id:<id_width$}  {:<name_width$}  {}", user.name, user.email);
    }

    let _ = write!(out, "Total de usuarios: {}", users.len());
    out
}
