use crate::error::{CliError, Result};
use crate::settings;
use crate::ui;
use tokio::runtime::Runtime;
use users_client::validation::field_hint;
use users_client::{
    ApiClient, ClientConfig, Outcome, PhoneRule, PhotoUpload, SignUpController, SignUpResult,
    format_phone,
};

#[derive(Debug, Clone)]
pub struct RegisterArgs {
    pub config_path: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position_id: i64,
    pub photo: String,
    pub phone_rule: Option<PhoneRule>,
}

pub fn execute(args: RegisterArgs) -> Result<()> {
    let config = settings::load(&args.config_path)?;

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(config, args))
}

async fn execute_async(config: ClientConfig, args: RegisterArgs) -> Result<()> {
    let rule = args.phone_rule.unwrap_or(config.validation.phone_rule);
    let mut controller = SignUpController::new(ApiClient::new(&config)?, rule);

    ui::section_header("User registration");

    let pb = ui::spinner("Loading positions...");
    let positions = controller.load_positions().await;
    pb.finish_and_clear();
    if let Outcome::Error(failure) = positions {
        ui::warning_message(&failure.message);
    }

    controller.set_name(args.name);
    controller.set_email(args.email);
    controller.set_phone(&args.phone);
    if !controller.select_position_id(args.position_id) {
        ui::warning_message(&format!("Unknown position id {}", args.position_id));
    }
    match PhotoUpload::from_path(&args.photo) {
        Ok(photo) => controller.attach_photo(photo),
        Err(err) => ui::warning_message(&err.to_string()),
    }

    if !controller.form().phone.is_empty() {
        ui::info_message(&format!("Phone: {}", format_phone(&controller.form().phone)));
    }

    let pb = ui::spinner("Submitting registration...");
    let result = controller.submit().await;
    pb.finish_and_clear();

    match result {
        SignUpResult::Registered(response) => {
            let id = response.user_id.map_or_else(|| "?".to_string(), |id| id.to_string());
            ui::success_message(&format!("{} (user id {})", response.message, id));
            Ok(())
        }
        SignUpResult::Invalid(errors) => {
            ui::error_message("Please correct the following fields:");
            for field in errors.fields() {
                ui::bullet(&format!("{}: {}", field, field_hint(field, rule)));
            }
            Err(CliError::Other(errors.to_string()))
        }
        SignUpResult::Failed(failure) => Err(CliError::Other(failure.message)),
        SignUpResult::Aborted => Err(CliError::Other("Registration aborted".to_string())),
    }
}
