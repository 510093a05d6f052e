use clap::{Parser, Subcommand};
use job_lens::filters::{PostedSort, TitleSort, ViewQuery};
use job_lens::{config::Config, create_router, loader, render, utils, AppState, Viewer};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "job-lens", version, about = "Load, filter and sort JSON job listings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the browser viewer (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Open the terminal viewer
    Tui {
        /// Listings file to load at startup
        file: Option<PathBuf>,
    },
    /// Print the filtered and sorted listings
    List {
        file: PathBuf,
        #[arg(long)]
        level: Option<String>,
        #[arg(long = "type")]
        job_type: Option<String>,
        #[arg(long)]
        skill: Option<String>,
        #[arg(long, value_enum)]
        sort_title: Option<TitleSort>,
        #[arg(long, value_enum)]
        sort_posted: Option<PostedSort>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => {
            utils::init_logger();
            serve(config, host, port).await
        }
        Command::Tui { file } => {
            let _guard = utils::init_file_logger(&config.logging.log_dir);
            job_lens::tui::run(config, file).await
        }
        Command::List {
            file,
            level,
            job_type,
            skill,
            sort_title,
            sort_posted,
        } => {
            utils::init_logger();
            let query = ViewQuery {
                level,
                job_type,
                skill,
                title_sort: sort_title,
                posted_sort: sort_posted,
            };
            list(&file, query).await
        }
    }
}

async fn serve(mut config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    info!("Configuration loaded: {:?}", config.server);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn list(file: &Path, query: ViewQuery) -> anyhow::Result<()> {
    let mut viewer = Viewer::new();
    viewer.apply_load(loader::load_file(Some(file)).await);
    viewer.set_query(query);

    if let Some(message) = viewer.banner().message() {
        anyhow::bail!("{}", message);
    }

    if let Some(view) = viewer.list_view() {
        print!("{}", render::text::list(&view));
    }
    Ok(())
}
