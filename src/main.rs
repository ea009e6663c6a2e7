use clap::Parser;
use locustgen::{
    Result,
    cli::{Cli, Commands},
    commands, telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let _guard = telemetry::init_telemetry()?;

    match cli.command {
        Commands::List { openapi } => {
            commands::execute_list(&openapi)?;
        }
        Commands::Generate {
            openapi,
            host,
            client_type,
            user_class_name,
            task_weight,
            output,
        } => {
            commands::execute_generate(commands::GenerateCommandArgs {
                openapi_path: &openapi,
                output_path: output.as_deref(),
                host: host.as_deref(),
                client_type,
                user_class_name: &user_class_name,
                task_weight,
            })?;
        }
        Commands::Serve { bind, port } => {
            commands::execute_serve(bind, port).await?;
        }
    }

    Ok(())
}
