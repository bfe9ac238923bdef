// Session commands: login, register, logout, whoami, refresh

use std::io::{self, BufRead, Write};

use super::Command;
use crate::context::AppContext;
use crate::error::{CliError, CliResult};

/// Ask on stderr, read one line from stdin
pub(crate) fn prompt(label: &str) -> CliResult<String> {
    eprint!("{}: ", label);
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let value = line.trim().to_string();
    if value.is_empty() {
        return Err(CliError::invalid(format!("{} is required", label.to_lowercase())));
    }
    Ok(value)
}

fn password_or_prompt(password: &Option<String>) -> CliResult<String> {
    match password {
        Some(password) => Ok(password.clone()),
        None => prompt("Password"),
    }
}

pub struct LoginCommand {
    pub phone_number: String,
    pub password: Option<String>,
}

impl LoginCommand {
    pub fn new(phone_number: String, password: Option<String>) -> Self {
        Self {
            phone_number,
            password,
        }
    }
}

#[async_trait::async_trait]
impl Command for LoginCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let password = password_or_prompt(&self.password)?;
        ctx.api.auth().login(&self.phone_number, &password).await?;

        let who = ctx
            .api
            .session()
            .current_user()
            .map(|user| user.phone_number)
            .unwrap_or_else(|| self.phone_number.clone());
        println!("{}", ctx.style.success(&format!("Logged in as {}", who)));
        if !ctx.api.session().is_seller() {
            println!(
                "{}",
                ctx.style.warning("This account has no seller role; seller endpoints will refuse it")
            );
        }
        Ok(())
    }
}

pub struct RegisterCommand {
    pub name: String,
    pub phone_number: String,
    pub password: Option<String>,
}

#[async_trait::async_trait]
impl Command for RegisterCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        if self.name.trim().is_empty() {
            return Err(CliError::invalid("store name must not be empty"));
        }
        let password = password_or_prompt(&self.password)?;
        let response = ctx
            .api
            .auth()
            .register_seller(&self.name, &self.phone_number, &password)
            .await?;
        println!(
            "{}",
            ctx.style.success(&format!(
                "Seller account {} created and logged in",
                response.account_id
            ))
        );
        Ok(())
    }
}

pub struct LogoutCommand;

#[async_trait::async_trait]
impl Command for LogoutCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        ctx.api.auth().logout()?;
        println!("{}", ctx.style.success("Logged out"));
        Ok(())
    }
}

pub struct WhoamiCommand;

#[async_trait::async_trait]
impl Command for WhoamiCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let session = ctx.api.session();
        let user = session.current_user().ok_or(CliError::NotLoggedIn)?;
        println!("{}", ctx.style.user(&user));
        if !session.is_authenticated() {
            println!(
                "{}",
                ctx.style.warning("Access token has expired; run 'yadwy refresh'")
            );
        }
        Ok(())
    }
}

pub struct RefreshCommand;

#[async_trait::async_trait]
impl Command for RefreshCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        ctx.require_login()?;
        ctx.api.auth().refresh().await?;
        println!("{}", ctx.style.success("Access token refreshed"));
        Ok(())
    }
}
