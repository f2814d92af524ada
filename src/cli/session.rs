//! Session token management
//!
//! Sign-in happens in the EcoChef web app; the CLI only stores the issued
//! bearer token and the user ID it belongs to.

use colored::Colorize;
use dialoguer::Password;
use log::debug;

use crate::cli::context::resolve_format;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::RecipeApi;
use crate::config::{Config, Session};
use crate::error::{ApiError, Error, Result};
use crate::output::json;

/// Store a token, resolving the user ID from the backend when not given
pub async fn set(opts: &GlobalOptions, token: Option<String>, user_id: Option<String>) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    let token = match token {
        Some(t) => t,
        None => Password::new()
            .with_prompt("EcoChef session token")
            .interact()?,
    };
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(Error::Validation("Session token cannot be empty".to_string()));
    }

    let session = Session::new(token.clone(), user_id);
    if session.is_expired() {
        return Err(Error::Validation(
            "This token has already expired. Sign in again to get a fresh one.".to_string(),
        ));
    }

    let session = match session.user_id {
        Some(_) => session,
        None => {
            ctx.client.set_token(token).await;
            let user = ctx.client.current_user().await.map_err(|e| match e {
                Error::Api(ApiError::Unauthorized) => Error::Validation(
                    "The backend rejected this token. The stored session was left unchanged."
                        .to_string(),
                ),
                other => other,
            })?;
            debug!("Token belongs to {}", user.email);
            Session {
                user_id: Some(user.id),
                ..session
            }
        }
    };

    ctx.config.session = Some(session);
    ctx.save_config()?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&session_summary(&ctx.config))?),
        _ => println!("{} Session saved", "✓".green()),
    }

    Ok(())
}

/// Show the stored session
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;

    match resolve_format(opts.format, &config) {
        OutputFormat::Json => println!("{}", json::format_json(&session_summary(&config))?),
        _ => print_session_lines(&config),
    }

    Ok(())
}

/// Forget the stored session
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    let had_session = config.session.take().is_some();
    config.save_at(opts.config_ref())?;

    match resolve_format(opts.format, &config) {
        OutputFormat::Json => {
            let output = serde_json::json!({ "cleared": had_session });
            println!("{}", json::format_json(&output)?);
        }
        _ if had_session => println!("{} Session cleared", "✓".green()),
        _ => println!("{} No session to clear", "○".dimmed()),
    }

    Ok(())
}

/// Drop a session the backend rejected
pub fn clear_rejected(config_path: Option<&str>) {
    let result = Config::load_at(config_path).and_then(|mut config| {
        if config.session.take().is_some() {
            config.save_at(config_path)?;
        }
        Ok(())
    });

    if let Err(e) = result {
        log::warn!("Could not clear rejected session: {}", e);
    }
}

/// Session state without the token itself
fn session_summary(config: &Config) -> serde_json::Value {
    match &config.session {
        None => serde_json::json!({ "active": false }),
        Some(session) => serde_json::json!({
            "active": config.has_active_session(),
            "expired": session.is_expired(),
            "user_id": session.user_id,
            "expires_at": session.expires_at.map(|e| e.to_rfc3339()),
        }),
    }
}

/// Human session lines, shared with the status command
pub fn print_session_lines(config: &Config) {
    match &config.session {
        None => {
            println!("{} No session stored", "✗".red());
            println!("  → Run 'ecochef session set' with the token from your EcoChef account");
        }
        Some(session) if session.is_expired() => {
            println!("{} Session expired", "⚠".yellow());
            println!("  → Sign in again and run 'ecochef session set'");
        }
        Some(session) => {
            match session.expires_at {
                Some(expires) => {
                    let remaining = expires.signed_duration_since(chrono::Utc::now());
                    println!(
                        "{} Session active (expires in {}h {}m)",
                        "✓".green(),
                        remaining.num_hours(),
                        remaining.num_minutes() % 60
                    );
                }
                None => println!("{} Session active", "✓".green()),
            }
            match &session.user_id {
                Some(id) => println!("{} User ID: {}", "✓".green(), id),
                None => println!("{} No user ID stored", "○".dimmed()),
            }
        }
    }
}
