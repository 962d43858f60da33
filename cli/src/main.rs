// TeX Compiler command-line client

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tex_compiler_api_client::ApiClient;
use tex_compiler_core::{PdfId, API_BASE_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "texc", version, about = "Compile TeX on a remote compile service")]
struct Cli {
    /// Compile service prefix
    #[arg(long, env = "TEX_API_BASE_URL", default_value = API_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit TeX source and print the service response
    Compile {
        /// TeX file; stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Also fetch the resulting PDF into this path
        #[arg(long, value_name = "PATH")]
        download: Option<PathBuf>,
    },
    /// Print preview and download URLs for a PDF id
    Urls {
        /// PDF id returned by a compile
        pdf_id: String,
    },
    /// Fetch a compiled PDF
    Download {
        /// PDF id returned by a compile
        pdf_id: String,

        /// Where to write the PDF
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr keeps stdout for results)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,texc=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = ApiClient::with_base_url(cli.base_url.as_str())?;

    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Compile { file, download } => {
            compile(&client, file.as_deref(), download, &mut stdout).await
        }
        Command::Urls { pdf_id } => print_urls(&client, &PdfId::new(pdf_id), &mut stdout),
        Command::Download { pdf_id, output } => {
            download_to(&client, &PdfId::new(pdf_id), &output).await
        }
    }
}

async fn compile(
    client: &ApiClient,
    file: Option<&Path>,
    download: Option<PathBuf>,
    out: &mut impl Write,
) -> Result<()> {
    let tex_code = read_source(file)?;
    tracing::info!("Compiling {} bytes of TeX on {}", tex_code.len(), client.endpoints().base_url());

    let result = client
        .compile_tex(&tex_code)
        .await
        .context("compile request failed")?;

    writeln!(out, "{}", serde_json::to_string_pretty(&result.data)?)?;

    match (result.pdf_id(), download) {
        (Some(pdf_id), download) => {
            print_urls(client, &pdf_id, out)?;
            if let Some(path) = download {
                download_to(client, &pdf_id, &path).await?;
            }
        }
        (None, Some(_)) => anyhow::bail!("response carries no PDF id; nothing to download"),
        (None, None) => tracing::warn!("Response carries no PDF id"),
    }

    Ok(())
}

fn print_urls(client: &ApiClient, pdf_id: &PdfId, out: &mut impl Write) -> Result<()> {
    if !pdf_id.is_url_safe() {
        tracing::warn!("PDF id {:?} is not URL-safe; URLs are built verbatim", pdf_id.as_str());
    }
    writeln!(out, "preview:  {}", client.pdf_preview_url(pdf_id))?;
    writeln!(out, "download: {}", client.pdf_download_url(pdf_id))?;
    Ok(())
}

async fn download_to(client: &ApiClient, pdf_id: &PdfId, path: &Path) -> Result<()> {
    let document = client
        .download_pdf(pdf_id)
        .await
        .with_context(|| format!("failed to download PDF {}", pdf_id))?;

    if let Err(e) = document.validate() {
        tracing::warn!("Downloaded data for {} does not look like a PDF: {}", pdf_id, e);
    }

    tokio::fs::write(path, &document.data)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Wrote {} bytes to {}", document.data.len(), path.display());

    Ok(())
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read TeX source from stdin")?;
            Ok(buffer)
        }
    }
}
