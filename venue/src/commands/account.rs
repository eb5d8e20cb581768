use venue_schema::forms::{LoginForm, RegisterForm};
use venue_utils::error::exts::ResultExt;
use venue_utils::types::ProtectedString;
use venue_utils::Result;

use venue_client::{Profile, Session};

use super::Context;
use crate::cli::{LoginArgs, RegisterArgs};

pub async fn login(ctx: &Context, args: &LoginArgs) -> Result<()> {
    let password = ProtectedString::new(&args.password);
    let form = LoginForm::builder()
        .email(&args.email)
        .password(&password)
        .build();

    let session = if ctx.admin {
        ctx.client.login_admin(&form).await
    } else {
        ctx.client.login_user(&form).await
    }
    .anonymize_error()?;

    print_session(&session);
    Ok(())
}

pub async fn register(ctx: &Context, args: &RegisterArgs) -> Result<()> {
    let password = ProtectedString::new(&args.password);
    let form = RegisterForm::builder()
        .name(&args.name)
        .email(&args.email)
        .phone(args.phone.as_deref())
        .password(&password)
        .build();

    let session = ctx.client.register_user(&form).await.anonymize_error()?;
    print_session(&session);
    Ok(())
}

// The token goes to stdout alone so it can be captured by scripts.
fn print_session(session: &Session) {
    match session.profile() {
        Some(Profile::User(user)) => eprintln!("Logged in as {} <{}>", user.name, user.email),
        Some(Profile::Admin(admin)) => {
            eprintln!("Logged in as admin {} <{}>", admin.name, admin.email);
        }
        None => {}
    }
    println!("{}", session.token().as_str());
}
