use crate::context::CliContext;
use crate::presentation::{ConsoleRenderer, MessageViewModel, SessionViewModel};
use anyhow::Result;
use corexia_runtime::auth;

pub fn login(
    ctx: &mut CliContext,
    email: &str,
    password: &str,
    offline: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let client = ctx.api_client(offline)?;
    let user = auth::login(&mut ctx.store, client.as_ref(), email, password)?;

    renderer.render(&SessionViewModel {
        signed_in: true,
        name: Some(user.name),
        email: Some(user.email),
    })
}

pub fn logout(ctx: &mut CliContext, renderer: &ConsoleRenderer) -> Result<()> {
    auth::logout(&mut ctx.store)?;
    renderer.render(&MessageViewModel::new("Signed out."))
}

pub fn whoami(ctx: &CliContext, renderer: &ConsoleRenderer) -> Result<()> {
    let view = match ctx.store.user() {
        Some(user) => SessionViewModel {
            signed_in: true,
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
        },
        None => SessionViewModel {
            signed_in: false,
            name: None,
            email: None,
        },
    };
    renderer.render(&view)
}
