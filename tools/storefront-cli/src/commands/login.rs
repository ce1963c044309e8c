//! Session commands.

use anyhow::{Context as _, Result};
use dialoguer::{Input, Password};
use storefront_client::Credentials;

use super::LoginArgs;
use crate::context::Context;

/// Run the login command.
pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .context("Failed to read email")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };

    let app = ctx.storefront();
    let spinner = ctx.output.spinner("Signing in...");
    let result = app
        .account
        .login(&Credentials { email, password })
        .await;
    spinner.finish_and_clear();

    let user = result.map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let token = app
        .token_store()
        .get()
        .context("Login succeeded but no token was returned")?;
    ctx.save_token(&token)?;

    if ctx.output.is_json() {
        ctx.output.json(&user);
        return Ok(());
    }
    ctx.output
        .success(&format!("Signed in as {}", user.email));
    Ok(())
}

/// Run the logout command.
pub async fn logout(ctx: &Context) -> Result<()> {
    let app = ctx.storefront();
    app.account.logout();
    ctx.clear_token()?;
    ctx.output.success("Signed out");
    Ok(())
}
