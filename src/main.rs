use devdays::commands::Cli;
use devdays::libs::messages::macros::is_debug_mode;
use devdays::msg_error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "devdays=debug,info".into()))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    if let Err(err) = Cli::menu() {
        msg_error!(format!("{:#}", err));
        std::process::exit(1);
    }
}
