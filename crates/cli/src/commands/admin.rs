//! Admin account creation and verification.

use anyhow::{bail, Context};
use sqlx::SqlitePool;

use parkside_api::auth::password::{hash_password, verify_password};
use parkside_core::roles::ROLE_ADMIN;
use parkside_db::models::user::CreateUser;
use parkside_db::repositories::{RoleRepo, UserRepo};

/// Env var holding the admin password for `create` and `verify`.
const PASSWORD_ENV: &str = "PARKSIDE_ADMIN_PASSWORD";

/// Create an admin account.
///
/// The password is taken from `PARKSIDE_ADMIN_PASSWORD`; when unset, a
/// random one is generated and printed once.
pub async fn create(
    pool: &SqlitePool,
    email: &str,
    name: &str,
    phone: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(existing) = UserRepo::find_by_email(pool, email).await? {
        let role = RoleRepo::resolve_name(pool, existing.role_id).await?;
        if role == ROLE_ADMIN {
            bail!("{email} already exists and is an admin (id {})", existing.id);
        }
        bail!(
            "{email} already exists with role '{role}' (id {}); \
             promote it via PUT /api/v1/admin/users/{} instead",
            existing.id,
            existing.id,
        );
    }

    let (password, generated) = match std::env::var(PASSWORD_ENV) {
        Ok(p) if !p.is_empty() => (p, false),
        _ => (uuid::Uuid::new_v4().to_string(), true),
    };

    let hashed = hash_password(&password)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;

    let role = RoleRepo::find_by_name(pool, ROLE_ADMIN)
        .await?
        .context("admin role missing from seed data")?;

    let input = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(String::from),
        password_hash: hashed,
        role_id: role.id,
    };
    let user = UserRepo::create(pool, &input).await?;

    println!("Created admin {email} (id {})", user.id);
    if generated {
        println!("Generated password: {password}");
        println!("({PASSWORD_ENV} was not set; store this password now, it is not recoverable)");
    }
    Ok(())
}

/// Verify that an account exists, is active, and holds the admin role.
///
/// When `PARKSIDE_ADMIN_PASSWORD` is set, also checks that it matches the
/// stored hash. Exits non-zero on any failed check.
pub async fn verify(pool: &SqlitePool, email: &str) -> anyhow::Result<()> {
    let user = UserRepo::find_by_email(pool, email)
        .await?
        .with_context(|| format!("no account found for {email}"))?;

    let role = RoleRepo::resolve_name(pool, user.role_id).await?;

    println!("id:             {}", user.id);
    println!("name:           {}", user.name);
    println!("role:           {role}");
    println!("active:         {}", user.is_active);
    println!("email verified: {}", user.email_verified);
    println!(
        "last login:     {}",
        user.last_login_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string()),
    );

    if role != ROLE_ADMIN {
        bail!("{email} does not hold the admin role");
    }
    if !user.is_active {
        bail!("{email} is deactivated");
    }

    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        let ok = verify_password(&password, &user.password_hash)
            .map_err(|e| anyhow::anyhow!("password verification failed: {e}"))?;
        if !ok {
            bail!("{PASSWORD_ENV} does not match the stored password");
        }
        println!("password:       matches");
    }

    println!("OK");
    Ok(())
}
