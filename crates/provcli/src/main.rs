// crates/provcli/src/main.rs

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use provconnectors::{Office365Property, OFFICE365_CONNECTOR_TYPE};
use provcore::ProvisioningProperties;
use provruntime::ConnectorRegistry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prov")]
#[command(about = "Outbound provisioning connector CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available connector types
    Connectors,

    /// Show the configuration schema of a connector type
    Schema {
        /// Connector type (e.g. Office365)
        connector: String,

        /// Print the schema as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a connector from a property file
    Build {
        /// Connector type (e.g. Office365)
        connector: String,

        /// Path to a JSON object of property values
        #[arg(short, long)]
        file: PathBuf,

        /// Override a property value (key=value), may be repeated
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create an example Office365 property file
    Init {
        /// Output file path
        #[arg(short, long, default_value = "office365.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Connectors => {
            list_connectors();
        }

        Commands::Schema { connector, json } => {
            show_schema(&connector, json)?;
        }

        Commands::Build {
            connector,
            file,
            overrides,
            verbose,
        } => {
            // Initialize logging
            if verbose {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::DEBUG)
                    .init();
            } else {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::INFO)
                    .init();
            }

            build_connector(&connector, file, &overrides)?;
        }

        Commands::Init { output } => {
            create_example_properties(output)?;
        }
    }

    Ok(())
}

fn registry() -> ConnectorRegistry {
    let mut registry = ConnectorRegistry::new();
    provconnectors::register_all(&mut registry);
    registry
}

fn list_connectors() {
    println!("📦 Available Connector Types:");
    println!();

    let registry = registry();
    for connector_type in registry.list_connector_types() {
        let count = registry
            .configuration_properties(&connector_type)
            .map(|p| p.len())
            .unwrap_or(0);
        println!("  • {} ({} properties)", connector_type, count);
    }
}

fn show_schema(connector_type: &str, json: bool) -> Result<()> {
    let properties = registry()
        .configuration_properties(connector_type)
        .ok_or_else(|| anyhow!("Unknown connector type: {}", connector_type))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&properties)?);
        return Ok(());
    }

    println!("📋 {} configuration:", connector_type);
    println!();
    for property in &properties {
        let mut flags = Vec::new();
        if property.required {
            flags.push("required");
        }
        if property.confidential {
            flags.push("confidential");
        }

        println!(
            "  {:>2}. {} [{}]{}",
            property.display_order,
            property.display_name,
            property.name,
            if flags.is_empty() {
                String::new()
            } else {
                format!(" ({})", flags.join(", "))
            }
        );
        if let Some(description) = &property.description {
            println!("      {}", description);
        }
    }

    Ok(())
}

fn parse_override(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim(), value))
        .ok_or_else(|| anyhow!("Invalid override '{}', expected KEY=VALUE", raw))
}

fn build_connector(connector_type: &str, file: PathBuf, overrides: &[String]) -> Result<()> {
    println!("🚀 Loading properties from: {}", file.display());

    let mut properties = ProvisioningProperties::from_json_file(&file)?;
    for raw in overrides {
        let (key, value) = parse_override(raw)?;
        properties.insert(key, value);
    }

    let registry = registry();
    let schema = registry
        .configuration_properties(connector_type)
        .ok_or_else(|| anyhow!("Unknown connector type: {}", connector_type))?;

    println!("📋 Properties:");
    for (name, value) in properties.redacted(&schema) {
        println!("   {}: {}", name, value);
    }
    println!();

    let connector = registry.create_connector(connector_type, &properties)?;
    let info = connector.info();

    println!("✨ {} connector created", info.connector_type);
    println!("   Instance ID: {}", info.instance_id);
    println!("   Created at: {}", info.created_at.to_rfc3339());

    Ok(())
}

fn create_example_properties(output: PathBuf) -> Result<()> {
    let properties: ProvisioningProperties = Office365Property::ALL
        .iter()
        .map(|key| {
            let value = match key {
                Office365Property::ClientId => "<application-client-id>",
                Office365Property::ClientSecret => "<application-client-secret>",
                Office365Property::Tenant => "username.onmicrosoft.com",
                Office365Property::Domain => "example.com",
                Office365Property::ImmutableId => "http://wso2.org/claims/userid",
                Office365Property::UserPrincipalName => "http://wso2.org/claims/username",
                Office365Property::EnableDomain => "true",
                Office365Property::DisplayName => "http://wso2.org/claims/displayName",
                Office365Property::MailNickname => "http://wso2.org/claims/nickname",
                Office365Property::MembershipAttribute => "",
                Office365Property::MembershipValue => "",
            };
            (key.as_str(), value)
        })
        .collect();

    let json = serde_json::to_string_pretty(&properties)?;
    std::fs::write(&output, json)?;

    println!("✨ Created example {} properties: {}", OFFICE365_CONNECTOR_TYPE, output.display());
    println!();
    println!("Fill in the client credentials, then build it with:");
    println!("  prov build {} --file {}", OFFICE365_CONNECTOR_TYPE, output.display());

    Ok(())
}
