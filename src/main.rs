use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use graphdb_importer::shared::utils::logger;
use graphdb_importer::{GraphDbClient, ImportOptions, ImportOrchestrator, ServerConfig};

/// GraphDB Importer
#[derive(Debug, Parser)]
#[command(name = "graphdb-import", version, about = "GraphDB Importer")]
struct Cli {
    /// The file to import. Supported formats: .ttl(.gz), .ttls(.gz),
    /// .rdf(.gz), .rj(.gz), .n3(.gz), .nt(.gz), .nq(.gz), .trig(.gz),
    /// .trigs(.gz), .trix(.gz), .brf(.gz), .owl(.gz), .jsonld(.gz), .zip
    file: PathBuf,

    /// The GraphDB server API, e.g. http://1.2.3.4:7200
    #[arg(short = 's', long, env = "GDB_BASE_API")]
    base_api: String,

    /// The repository to import into; it must already exist on the server.
    #[arg(short = 'r', long, env = "GDB_REPOSITORY")]
    repository: String,

    /// GraphDB username.
    #[arg(short = 'u', long, env = "GDB_USERNAME")]
    username: Option<String>,

    /// GraphDB password.
    #[arg(short = 'p', long, env = "GDB_PASSWORD")]
    password: Option<String>,

    /// Import into a specific named graph. Without this, the graph(s) defined
    /// in the file are used; pass "default" to force the default graph.
    #[arg(short = 'g', long, env = "GDB_NAMED_GRAPH")]
    named_graph: Option<String>,

    /// Delete the existing graph and import the new data. (default: true)
    #[arg(short = 'R', long, default_value = "true", value_parser = parse_bool, action = clap::ArgAction::Set)]
    replace_graph: bool,

    /// Delete the upload from the server after the import completes.
    /// (default: true)
    #[arg(short = 'd', long, default_value = "true", value_parser = parse_bool, action = clap::ArgAction::Set)]
    remove_upload: bool,

    /// Preserve blank node IDs. Helpful when importing a split ontology.
    /// (default: false)
    #[arg(long, default_value = "false", value_parser = parse_bool, action = clap::ArgAction::Set)]
    preserve_bnode: bool,

    /// Server-side name for this import; defaults to the file name. Set it to
    /// disambiguate repeated uploads of files sharing a name.
    #[arg(short = 'n', long)]
    import_name: Option<String>,
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "true" | "True" => Ok(true),
        "0" | "false" | "False" => Ok(false),
        other => Err(format!(
            "expected one of 0, 1, true, false, True, False, got '{other}'"
        )),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logger::init_logger();

    let cli = Cli::parse();

    if !cli.file.exists() {
        eprintln!("Cannot find the provided file: {}", cli.file.display());
        process::exit(1);
    }

    if let Err(error) = run(cli).await {
        eprintln!("{error:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ServerConfig::new(cli.base_api, cli.repository)
        .with_credentials(cli.username, cli.password);
    let client = GraphDbClient::new(config.clone()).context("failed to build HTTP client")?;
    let orchestrator = ImportOrchestrator::new(config, client);

    let options = ImportOptions {
        import_name: cli.import_name,
        named_graph: cli.named_graph,
        replace_graph: cli.replace_graph,
        remove_upload_after_import: cli.remove_upload,
        preserve_bnode: cli.preserve_bnode,
    };

    orchestrator.import_and_wait(&cli.file, &options).await?;
    Ok(())
}
