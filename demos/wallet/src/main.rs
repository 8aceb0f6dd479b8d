use clap::{Parser, Subcommand};
use coffer::prelude::*;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "wallet")]
#[command(about = "Check a balance, browse the shop and send money from the terminal")]
struct Cli {
    /// API root every endpoint path is appended to
    #[arg(long, env = "COFFER_API_ROOT", default_value = GatewayConfig::DEFAULT_API_ROOT)]
    api_root: String,

    /// File the player identifier is kept in between runs
    #[arg(long, env = "COFFER_SESSION_FILE", default_value = "coffer-session.json")]
    session_file: String,

    /// Player to log in as when no session is saved
    #[arg(long, env = "COFFER_PLAYER")]
    player: Option<String>,

    /// Password for `--player`, if the backend requires one
    #[arg(long, env = "COFFER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Command {
    /// Print the current balance (default)
    Balance,
    /// List the shop catalogue
    Items,
    /// List perks applied to the current player
    Perks,
    /// Send money to another player
    Send {
        /// Recipient player id
        to: String,
        /// Whole amount to send
        amount: i64,
    },
    /// Buy an item by id
    Buy { item_id: String },
    /// Forget the saved session
    Logout,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    coffer::init_tracing();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Balance);

    let client = CofferClientBuilder::new()
        .api_root(cli.api_root)
        .build(ReqwestTransport::new(), FileStorage::new(cli.session_file));

    if command == Command::Logout {
        client.sign_out()?;
        eprintln!("logged out");
        return Ok(());
    }

    if !client.resume().await? {
        let player = cli
            .player
            .ok_or("no saved session; pass --player or set COFFER_PLAYER to log in")?;
        let mut credentials = Credentials::player(player);
        if let Some(password) = cli.password {
            credentials = credentials.with_password(password);
        }
        client.sign_in(&credentials).await?;
    }

    let session = client.session().snapshot();
    tracing::info!(
        player = ?session.player_uuid,
        name = ?session.name,
        "session ready"
    );

    match command {
        Command::Balance => {
            println!("{}: {}", session.name.unwrap_or_default(), session.balance);
        }
        Command::Items => {
            for item in client.gateway().list_items().await? {
                println!("{:<12} {:>6}  {}", item.item_id, item.price, item.name);
            }
        }
        Command::Perks => {
            for perk in client.my_perks().await? {
                println!("{:<12} {}", perk.perk_id, perk.name);
            }
        }
        Command::Send { to, amount } => {
            let receipt = client.send_money(&PlayerUuid::new(to), amount).await?;
            println!(
                "sent {} to {}; balance now {}",
                receipt.transferred, receipt.to_name, receipt.new_balance
            );
        }
        Command::Buy { item_id } => {
            let receipt = client.purchase_item(&item_id).await?;
            println!(
                "bought {} for {}; balance now {}",
                receipt.item.name, receipt.paid, receipt.new_balance
            );
        }
        Command::Logout => {}
    }

    Ok(())
}
