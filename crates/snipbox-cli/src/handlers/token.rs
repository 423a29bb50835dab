//! Token command handlers.

use anyhow::{Result, bail};
use chrono::Duration;
use snipbox_core::UserId;

use crate::bootstrap::CliContext;
use crate::commands::TokenCommand;

/// Execute a `token` subcommand.
pub async fn execute(ctx: &CliContext, command: TokenCommand) -> Result<()> {
    match command {
        TokenCommand::Issue { user_id, ttl_hours } => {
            let token = issue(ctx, &UserId::from(user_id), ttl_hours).await?;
            println!("{token}");
        }
        TokenCommand::Revoke { token } => {
            if ctx.identity.revoke_token(&token).await? {
                println!("Token revoked");
            } else {
                bail!("No such token");
            }
        }
    }
    Ok(())
}

/// Issue a token, expiring after `ttl_hours` when given.
pub async fn issue(ctx: &CliContext, user: &UserId, ttl_hours: Option<i64>) -> Result<String> {
    let ttl = match ttl_hours {
        Some(hours) if hours <= 0 => bail!("--ttl-hours must be positive"),
        Some(hours) => Some(
            Duration::try_hours(hours)
                .ok_or_else(|| anyhow::anyhow!("--ttl-hours is out of range"))?,
        ),
        None => None,
    };

    Ok(ctx.identity.issue_token(user, ttl).await?)
}
