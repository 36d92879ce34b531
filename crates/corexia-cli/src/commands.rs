use super::args::{Cli, Commands, ConfigCommand, ResourceCommand};
use super::handlers;
use crate::context::CliContext;
use crate::presentation::ConsoleRenderer;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let mut ctx = CliContext::open(cli.data_dir.as_deref())?;
    let renderer = ConsoleRenderer::new(cli.format);

    match command {
        Commands::Dataset { command } => match command {
            ResourceCommand::List { list } => {
                handlers::list::datasets(&ctx, &list, cli.offline, &renderer)
            }
        },

        Commands::Finetune { command } => match command {
            ResourceCommand::List { list } => {
                handlers::list::finetunes(&ctx, &list, cli.offline, &renderer)
            }
        },

        Commands::Model { command } => match command {
            ResourceCommand::List { list } => {
                handlers::list::models(&ctx, &list, cli.offline, &renderer)
            }
        },

        Commands::Eval { command } => match command {
            ResourceCommand::List { list } => {
                handlers::list::evaluations(&ctx, &list, cli.offline, &renderer)
            }
        },

        Commands::Infer {
            model,
            prompt,
            temperature,
        } => handlers::infer::handle(&ctx, &model, &prompt, temperature, cli.offline, &renderer),

        Commands::Login { email, password } => {
            handlers::auth::login(&mut ctx, &email, &password, cli.offline, &renderer)
        }

        Commands::Logout => handlers::auth::logout(&mut ctx, &renderer),

        Commands::Whoami => handlers::auth::whoami(&ctx, &renderer),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, &renderer),
            ConfigCommand::Set { key, value } => {
                handlers::config::set(&mut ctx, &key, &value, &renderer)
            }
        },

        Commands::Dashboard => handlers::dashboard::handle(ctx, cli.offline),
    }
}

fn show_guidance() {
    println!("corexia - Corexia platform admin console\n");
    println!("Quick commands:");
    println!("  corexia dashboard                 # Interactive dashboard");
    println!("  corexia dataset list              # Browse datasets");
    println!("  corexia finetune list             # Browse finetune jobs");
    println!("  corexia login --email <EMAIL>     # Sign in\n");
    println!("For more commands:");
    println!("  corexia --help");
}
