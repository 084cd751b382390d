use std::path::PathBuf;
use clap::Parser;

mod assets;
mod catalog;
mod commands;
mod sql;
mod utils;

#[derive(clap::Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    ExportCatalog(ExportCatalogCommand),
    LocalizeAssets(LocalizeAssetsCommand),
}

#[derive(clap::Args)]
struct ExportCatalogCommand {
    #[clap(short, long, default_value = "product category.json")]
    input: PathBuf,

    #[clap(short, long, default_value = "insert_categories_and_products.sql")]
    output: PathBuf,

    /// Generate a slug from the name when the catalog leaves it empty
    #[clap(long)]
    derive_missing_slugs: bool,

    /// Drop products whose slug repeats within the same category
    #[clap(long)]
    skip_duplicate_products: bool,
}

#[derive(clap::Args)]
struct LocalizeAssetsCommand {
    #[clap(short, long, default_value = "image_urls.txt")]
    input: PathBuf,

    #[clap(short, long, default_value = "update_image_urls.sql")]
    output: PathBuf,

    #[clap(short = 'd', long, default_value = "ab-frontend/public/images")]
    images_directory: PathBuf,

    #[clap(short, long, default_value = assets::DEFAULT_SIZE_FILTER)]
    filter: String,

    /// Per-request timeout in seconds; requests wait indefinitely when omitted
    #[clap(short, long)]
    timeout: Option<u64>,
}


fn setup_logging() -> anyhow::Result<flexi_logger::LoggerHandle> {
    let spec = flexi_logger::LogSpecification::parse("warn,catalog_seed=debug")?;
    let handle = flexi_logger::Logger::with(spec)
        .log_to_file(
            flexi_logger::FileSpec::default()
                .directory("logs")
                .basename("catalog-seed")
                .use_timestamp(false),
        )
        .duplicate_to_stdout(flexi_logger::Duplicate::Info)
        .format_for_files(flexi_logger::detailed_format)
        .format_for_stdout(flexi_logger::colored_detailed_format)
        .set_palette("b1;3;2;4;6".to_string())
        .start()?;
    Ok(handle)
}

fn main() -> anyhow::Result<()> {
    let _logger = setup_logging()?;
    log::info!("Starting catalog-seed!");

    let cli = Cli::parse();

    match cli.command {
        Command::ExportCatalog(export) => {
            let options = catalog::ExportOptions {
                derive_missing_slugs: export.derive_missing_slugs,
                skip_duplicate_products: export.skip_duplicate_products,
            };
            commands::export_catalog::export_catalog(export.input, export.output, options)?;
        }
        Command::LocalizeAssets(localize) => {
            commands::localize_assets::localize_assets(
                localize.input,
                localize.output,
                localize.images_directory,
                localize.filter,
                localize.timeout.map(std::time::Duration::from_secs),
            )?;
        }
    }

    Ok(())
}
