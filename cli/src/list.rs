use crate::error::{CliError, Result};
use crate::settings;
use crate::table::TableBuilder;
use crate::ui;
use tokio::runtime::Runtime;
use users_client::{
    ApiClient, CancellationToken, ClientConfig, PageLoad, User, UserListLoader, format_phone,
};

#[derive(Debug, Clone)]
pub struct ListArgs {
    pub config_path: String,
    pub pages: u32,
    pub all: bool,
    pub json: bool,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let config = settings::load(&args.config_path)?;

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(config, args))
}

async fn execute_async(config: ClientConfig, args: ListArgs) -> Result<()> {
    let client = ApiClient::new(&config)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let loader =
        UserListLoader::new(client, config.pagination.page_size).with_cancellation(cancel);

    let mut requested = 0;
    loop {
        if !args.all && requested >= args.pages {
            break;
        }

        let pb = ui::spinner(&format!("Loading page {}...", loader.cursor().current_page));
        let result = if requested == 0 {
            loader.activate().await
        } else {
            loader.on_scroll(true).await
        };
        pb.finish_and_clear();
        requested += 1;

        match result {
            PageLoad::Loaded { has_more, .. } if has_more => continue,
            PageLoad::Loaded { .. } | PageLoad::Exhausted | PageLoad::Skipped | PageLoad::Busy => {
                break;
            }
            PageLoad::Aborted => {
                ui::warning_message("Interrupted");
                break;
            }
            PageLoad::Failed(failure) => {
                tracing::debug!(%failure, "Page load failed");
                ui::error_message(&failure.message);
                break;
            }
        }
    }

    let users = loader.users();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&users)?);
    } else {
        print_users(&users);
        let cursor = loader.cursor();
        let total = cursor.total_pages.map_or_else(|| "?".to_string(), |t| t.to_string());
        if loader.has_more() {
            ui::info_message(&format!(
                "{} users loaded, next page {} of {} (use --all to load everything)",
                users.len(),
                cursor.current_page,
                total
            ));
        } else {
            ui::success_message(&format!("{} users loaded, all {} pages", users.len(), total));
        }
    }
    Ok(())
}

fn print_users(users: &[User]) {
    if users.is_empty() {
        ui::warning_message("No users to show");
        return;
    }

    let mut table = TableBuilder::new();
    table.headers(vec!["Id", "Name", "Position", "Email", "Phone", "Registered"]);
    for user in users {
        table.row(user_row(user));
    }
    println!("{}", table.build());
}

fn user_row(user: &User) -> Vec<String> {
    let registered = user
        .registered_at()
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    vec![
        user.id.to_string(),
        user.name.clone(),
        user.position.clone(),
        user.email.clone(),
        display_phone(&user.phone),
        registered,
    ]
}

/// Reformat a stored "+380XXXXXXXXX" number in the form's mask
fn display_phone(phone: &str) -> String {
    let local = phone.trim_start_matches("+38");
    if local.len() == 10 && local.chars().all(|c| c.is_ascii_digit()) {
        format_phone(local)
    } else {
        phone.to_string()
    }
}
