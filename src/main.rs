//! IDM Console - Main Entry Point
//!
//! One-shot administration commands against an identity server.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use idm_console::app::navigation::RouteTable;
use idm_console::cli::{Cli, Command, IdpCommand, TemplateTypeCommand};
use idm_console::connection::ConsoleConfig;
use idm_console::eventing::AlertSink;
use idm_console::features::email_templates::{
    EmailTemplateTypesController, TemplatePreview, TemplateTypeWizard,
};
use idm_console::features::identity_providers::IdentityProviderSettingsController;
use idm_console::logging::{bootstrap_subscriber, init_logging};
use idm_console::output::{
    ConsoleAlertSink, render_identity_provider, render_preview, render_routes,
    render_template_type_page,
};
use idm_console::services::{BackendApi, HttpBackend};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("✗ {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config =
        tracing::subscriber::with_default(bootstrap_subscriber(cli.verbose), || load_config(&cli))?;

    let _guard = init_logging(&config.log, cli.verbose);
    tracing::info!(server = %config.server_url, "Starting IDM Console");

    if let Command::Routes(args) = &cli.command {
        let table = if args.admin {
            RouteTable::admin_portal()
        } else {
            RouteTable::user_portal()
        };
        print!("{}", render_routes(&table));
        return Ok(());
    }

    let backend: Arc<dyn BackendApi> =
        Arc::new(HttpBackend::new(&config).context("Failed to build HTTP client")?);
    let alerts: Arc<dyn AlertSink> = Arc::new(ConsoleAlertSink);

    match cli.command {
        Command::TemplateTypes(cmd) => run_template_types(cmd, &config, backend, alerts),
        Command::Idp(cmd) => run_idp(cmd, &config, backend, alerts),
        Command::Routes(_) => Ok(()),
    }
}

fn load_config(cli: &Cli) -> Result<ConsoleConfig> {
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConsoleConfig::load().context("Failed to load configuration")?,
    };
    if let Some(server) = &cli.server {
        config
            .override_server_url(server.as_str())
            .context("Invalid --server value")?;
    }
    Ok(config)
}

fn run_template_types(
    cmd: TemplateTypeCommand,
    config: &ConsoleConfig,
    backend: Arc<dyn BackendApi>,
    alerts: Arc<dyn AlertSink>,
) -> Result<()> {
    let mut controller = EmailTemplateTypesController::new(
        backend.clone(),
        alerts,
        config.email_template_type_item_limit,
    )?;

    match cmd {
        TemplateTypeCommand::List { page, limit } => {
            controller
                .refresh()
                .context("Failed to fetch email template types")?;
            if let Some(limit) = limit {
                controller.on_items_per_page_change(limit)?;
            }
            controller.on_page_change(page)?;
            print!("{}", render_template_type_page(controller.view())?);
        }
        TemplateTypeCommand::Create { display_name } => {
            let mut wizard = TemplateTypeWizard::new();
            wizard.submit_basic_details(display_name)?;
            let created = controller.create_template_type(&wizard)?;
            println!("{}", created.id);
        }
        TemplateTypeCommand::Delete { id } => {
            controller.delete_template_type(&id)?;
        }
        TemplateTypeCommand::Preview {
            type_id,
            template_id,
        } => {
            let preview = TemplatePreview::load(backend.as_ref(), &type_id, &template_id)
                .context("Failed to fetch email template")?;
            print!("{}", render_preview(&preview));
        }
    }
    Ok(())
}

fn run_idp(
    cmd: IdpCommand,
    config: &ConsoleConfig,
    backend: Arc<dyn BackendApi>,
    alerts: Arc<dyn AlertSink>,
) -> Result<()> {
    let controller = IdentityProviderSettingsController::new(
        backend,
        alerts,
        config.do_not_delete_identity_providers.iter().cloned(),
    );

    match cmd {
        IdpCommand::Show { id } => {
            let idp = controller
                .load(&id)
                .context("Failed to fetch identity provider")?;
            print!(
                "{}",
                render_identity_provider(&idp, controller.can_delete(&idp.name))
            );
        }
        IdpCommand::Delete { id } => {
            let idp = controller
                .load(&id)
                .context("Failed to fetch identity provider")?;
            controller.delete(&idp)?;
        }
        IdpCommand::Rename { id, name } => {
            let mut idp = controller
                .load(&id)
                .context("Failed to fetch identity provider")?;
            idp.name = name;
            controller.update(&idp)?;
        }
    }
    Ok(())
}
