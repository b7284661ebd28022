//! Typo → WordPress conversion command.
//!
//! Reads the Typo tables from one database and writes WordPress rows into
//! another (or the same) database. Pages and articles are merged by slug;
//! comments and trackbacks are appended on every run.

use anyhow::Context as _;
use typo2wp_core::MigrationConfig;
use typo2wp_service::{LinePrompt, MigrationService};
use typo2wp_storage::{Database, TypoDb, WordPressDb};

pub(crate) struct ConvertArgs {
    pub from_db: String,
    pub to_db: Option<String>,
    pub config: MigrationConfig,
}

pub(crate) async fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let source = Database::connect(&args.from_db)
        .await
        .context("failed to open the Typo database")?;
    let target = match args.to_db.as_deref() {
        Some(url) => {
            Database::connect(url).await.context("failed to open the WordPress database")?
        },
        None => source.clone(),
    };
    tracing::info!(
        source = ?source.dialect(),
        target = ?target.dialect(),
        prefix = %args.config.table_prefix,
        overwrite = ?args.config.overwrite,
        "connected"
    );

    let typo = TypoDb::new(source);
    let wp = WordPressDb::new(target, args.config.table_prefix.clone());
    let mut service = MigrationService::new(&typo, &wp, &args.config, LinePrompt::stdio());

    service.validate_schema().await?;
    let report = service.run_with(|phase| println!("\n## {phase}")).await?;

    println!("\n## Summary");
    println!("{report}");
    println!("\nConversion complete!");
    Ok(())
}
