//! One-shot user provisioning against the admin database.

use mongodb::Database;
use mongodb::bson::{Document, doc};
use tracing::info;

use crate::config::Config;
use crate::error::InitError;

/// Build the `createUser` command document.
///
/// Field values are passed through verbatim; an empty user or database name
/// stays empty and is left for the server to reject.
pub fn create_user_command(user: &str, password: &str, database: &str) -> Document {
    doc! {
        "createUser": user,
        "pwd": password,
        "roles": [{ "role": "readWrite", "db": database }],
    }
}

/// Create the configured principal with `readWrite` on the target database.
///
/// Issues exactly one `createUser` call against the injected `admin` handle.
/// Server-side failures (duplicate principal, rejected credentials,
/// unreachable server) propagate unchanged; there is no retry and a rerun
/// with the same user fails on the duplicate.
pub async fn add_user(admin: &Database, cfg: &Config) -> Result<(), InitError> {
    info!("Adding New Users");
    admin
        .run_command(create_user_command(&cfg.user, &cfg.password, &cfg.database))
        .await?;
    info!("End Adding the User Roles.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::create_user_command;

    #[test]
    fn command_grants_read_write_on_target_database() {
        let cmd = create_user_command("app", "secret", "appdb");

        assert_eq!(cmd.get_str("createUser").expect("createUser field"), "app");
        assert_eq!(cmd.get_str("pwd").expect("pwd field"), "secret");

        let roles = cmd.get_array("roles").expect("roles field");
        assert_eq!(roles.len(), 1);
        let role = roles[0].as_document().expect("role document");
        assert_eq!(role.get_str("role").expect("role name"), "readWrite");
        assert_eq!(role.get_str("db").expect("role db"), "appdb");
    }

    #[test]
    fn empty_user_is_not_substituted() {
        let cmd = create_user_command("", "secret", "appdb");
        assert_eq!(cmd.get_str("createUser").expect("createUser field"), "");
    }

    #[test]
    fn empty_database_is_not_substituted() {
        let cmd = create_user_command("app", "secret", "");
        let roles = cmd.get_array("roles").expect("roles field");
        let role = roles[0].as_document().expect("role document");
        assert_eq!(role.get_str("db").expect("role db"), "");
    }
}
