use clap::Parser;
use mws_requests::core::Request;
use mws_requests::utils::logger;
use mws_requests::{api, CliConfig};

fn section_matches(request: &Request, section: &str) -> bool {
    match section.to_ascii_lowercase().as_str() {
        "inbound" => request.path().starts_with("/FulfillmentInboundShipment"),
        "inventory" => request.path().starts_with("/FulfillmentInventory"),
        "outbound" => request.path().starts_with("/FulfillmentOutboundShipment"),
        "finances" => request.path().starts_with("/Finances"),
        _ => false,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    let operations: Vec<Request> = api::catalog()
        .into_iter()
        .filter(|op| {
            config
                .section
                .as_deref()
                .map_or(true, |section| section_matches(op, section))
        })
        .collect();

    if operations.is_empty() {
        eprintln!(
            "No operations match section '{}'. Known sections: inbound, inventory, outbound, finances",
            config.section.as_deref().unwrap_or("")
        );
        std::process::exit(1);
    }

    tracing::info!(count = operations.len(), "listing supported operations");

    if config.json {
        let descriptions: Vec<_> = operations.iter().map(Request::describe).collect();
        println!("{}", serde_json::to_string_pretty(&descriptions)?);
        return Ok(());
    }

    for operation in &operations {
        let info = operation.info();
        println!("{} ({}) {}", info.action, info.group, info.path);
        for spec in operation.schema() {
            let mut flags = Vec::new();
            if spec.required {
                flags.push("required");
            }
            if spec.list {
                flags.push("list");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            println!("  {:<32} -> {}{}", spec.field, spec.name, flags);
        }
        println!();
    }

    Ok(())
}
