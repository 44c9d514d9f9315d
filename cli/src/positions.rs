use crate::error::{CliError, Result};
use crate::settings;
use crate::table::TableBuilder;
use crate::ui;
use tokio::runtime::Runtime;
use users_client::{ApiClient, Outcome, UsersApi};

pub fn execute(config_path: &str) -> Result<()> {
    let config = settings::load(config_path)?;
    let client = ApiClient::new(&config)?;

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    let pb = ui::spinner("Loading positions...");
    let outcome = rt.block_on(client.get_positions());
    pb.finish_and_clear();

    match outcome {
        Outcome::Success(response) if response.success => {
            let mut table = TableBuilder::new();
            table.headers(vec!["Id", "Position"]);
            for position in &response.positions {
                table.row(vec![position.id.to_string(), position.name.clone()]);
            }
            println!("{}", table.build());
            Ok(())
        }
        Outcome::Error(failure) => Err(CliError::Other(failure.message)),
        _ => Err(CliError::Other(
            users_client::outcome::MESSAGE_UNKNOWN_ERROR.to_string(),
        )),
    }
}
