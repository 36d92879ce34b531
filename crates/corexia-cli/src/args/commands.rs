use super::common::ListArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse datasets")]
    Dataset {
        #[command(subcommand)]
        command: ResourceCommand,
    },

    #[command(about = "Browse finetune jobs")]
    Finetune {
        #[command(subcommand)]
        command: ResourceCommand,
    },

    #[command(about = "Browse models")]
    Model {
        #[command(subcommand)]
        command: ResourceCommand,
    },

    #[command(about = "Browse evaluation runs")]
    Eval {
        #[command(subcommand)]
        command: ResourceCommand,
    },

    #[command(about = "Run a prompt against a model (mock inference)")]
    Infer {
        #[arg(long, help = "Model name from the models list")]
        model: String,

        #[arg(long)]
        prompt: String,

        #[arg(long, default_value_t = 0.7)]
        temperature: f64,
    },

    #[command(about = "Sign in to the platform (mock auth)")]
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        password: String,
    },

    #[command(about = "Clear the stored session")]
    Logout,

    #[command(about = "Show the signed-in user")]
    Whoami,

    #[command(about = "Inspect or change configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Open the interactive dashboard")]
    Dashboard,
}

#[derive(Subcommand)]
pub enum ResourceCommand {
    #[command(about = "List records with filtering, sorting and pagination")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Set a configuration value (api.base_url, api.timeout_secs, ui.page_size)")]
    Set { key: String, value: String },
}
