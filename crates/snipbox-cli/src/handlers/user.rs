//! User command handlers.

use anyhow::Result;
use snipbox_core::{Profile, UserId};

use crate::bootstrap::CliContext;
use crate::commands::UserCommand;

/// Execute a `user` subcommand.
pub async fn execute(ctx: &CliContext, command: UserCommand) -> Result<()> {
    match command {
        UserCommand::Create {
            username,
            avatar_url,
            with_token,
        } => {
            let (user, token) = create(ctx, &username, avatar_url, with_token).await?;
            println!("Created user {username} ({user})");
            if let Some(token) = token {
                println!("Token: {token}");
            }
        }
    }
    Ok(())
}

/// Create a user and its profile, optionally issuing a non-expiring token.
pub async fn create(
    ctx: &CliContext,
    username: &str,
    avatar_url: Option<String>,
    with_token: bool,
) -> Result<(UserId, Option<String>)> {
    let user = ctx.identity.create_user().await?;
    ctx.identity
        .save_profile(&Profile {
            id: user.clone(),
            username: Some(username.to_string()),
            avatar_url,
        })
        .await?;

    let token = if with_token {
        Some(ctx.identity.issue_token(&user, None).await?)
    } else {
        None
    };

    tracing::debug!(user_id = %user, "Created user from CLI");
    Ok((user, token))
}
