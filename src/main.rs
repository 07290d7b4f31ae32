use clap::Parser;
use food_log::{
    ClientConfig, app,
    config::ConnectionArgs,
    handlers::{self, Flow},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "food_log")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Daily calorie log in the terminal")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from(cli.connection);
    info!(base_url = %config.base_url, "starting food log client");

    let mut controller = app::build(&config)?;
    controller.init().await;
    println!("{}", handlers::help());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        match handlers::parse_command(&line) {
            Ok(Some(command)) => {
                if handlers::dispatch(&mut controller, command).await == Flow::Exit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!(kind = ?err.kind(), "unrecognized input");
                println!("{err}");
            }
        }
    }

    Ok(())
}
