//! Contact form.

use anyhow::Result;
use dialoguer::Input;
use shfeet_commerce::contact::ContactMessage;

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let interactive = !args.no_input && !ctx.output.is_json();
    let message = ContactMessage {
        name: field(args.name, "Name", interactive)?,
        email: field(args.email, "Email", interactive)?,
        subject: field(args.subject, "Subject (optional)", interactive)?,
        message: field(args.message, "Message", interactive)?,
    };
    message.validate()?;

    let api = ctx.api()?;
    let spinner = ctx.output.spinner("Sending message...");
    let sent = message.submit(&api).await;
    spinner.finish_and_clear();

    let notice = sent?;
    if ctx.output.is_json() {
        ctx.output.json(&notice);
    } else {
        ctx.output.notices(&[notice]);
    }
    Ok(())
}

fn field(given: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}
