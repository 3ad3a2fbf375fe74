//! FolioCli application.
//!
//! Wires configuration, site content, and the API source together and
//! dispatches parsed commands.

use crate::cli::{BaseCommand, CliArgs, RenderArgs, SectionKind};
use crate::config::FolioConfig;
use crate::config_handlers;
use folio_core::markup::{Heading, RecordMarkup, RenderContext, render_education, render_section};
use folio_core::models::EducationSummary;
use folio_core::traits::ConfigProvider;
use folio_core::{Record, Result, SectionState, SiteContent};
use folio_fetch::{HttpSource, MountedSection, ResourceLoader, ResourceSource};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// FolioCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct FolioCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    source: Arc<dyn ResourceSource>,
    version: String,
}

impl FolioCli<FolioConfig> {
    /// Create from CLI args, loading config from file/env.
    ///
    /// `--api-url` takes precedence over the configured base URL.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let mut config = FolioConfig::load(args.config.as_deref())?;
        if let Some(url) = &args.api_url {
            config = config.with_api_url(url);
        }
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> FolioCli<C> {
    /// Create a CLI application reading from the configured API.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        let source = Arc::new(HttpSource::new(config.api_base_url()));
        Self {
            name: name.into(),
            config: Arc::new(config),
            source,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Read collections from `source` instead of the configured API.
    pub fn with_source(mut self, source: Arc<dyn ResourceSource>) -> Self {
        self.source = source;
        self
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Logs go to stderr so rendered output stays clean on stdout.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(BaseCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(BaseCommand::Health) => {
                for line in self.health().await? {
                    println!("{line}");
                }
                Ok(())
            }
            Some(BaseCommand::Render(render_args)) => {
                println!("{}", self.render(&render_args).await?);
                Ok(())
            }
            Some(BaseCommand::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Site content from the configured file, or the bundled document.
    pub fn site_content(&self) -> Result<SiteContent> {
        SiteContent::load(self.config.content_path().as_deref())
    }

    /// Render one section as HTML, or as JSON with `--json`.
    pub async fn render(&self, args: &RenderArgs) -> Result<String> {
        let content = self.site_content()?;
        let ctx = RenderContext {
            placeholder_image: self.config.placeholder_image(),
        };

        match args.section {
            SectionKind::Certificates => {
                let state = self
                    .settle_section(content.certificates.items.clone(), args)
                    .await;
                present(Heading::from(&content.certificates), &state, &ctx, args.json)
            }
            SectionKind::Projects => {
                let state = self.settle_section(content.projects.items.clone(), args).await;
                present(Heading::from(&content.projects), &state, &ctx, args.json)
            }
            SectionKind::Education => {
                let entries = &content.education.items;
                if args.json {
                    return Ok(serde_json::to_string_pretty(entries)?);
                }
                let summary = EducationSummary::compute(entries);
                Ok(render_education(
                    Heading::from(&content.education),
                    entries,
                    &summary,
                ))
            }
        }
    }

    /// One status line per fetched section: live, or fallback with the reason.
    pub async fn health(&self) -> Result<Vec<String>> {
        let content = self.site_content()?;

        // Both loads run concurrently once mounted.
        let mut certificates = MountedSection::mount(ResourceLoader::new(
            Arc::clone(&self.source),
            content.certificates.items,
        ));
        let mut projects = MountedSection::mount(ResourceLoader::new(
            Arc::clone(&self.source),
            content.projects.items,
        ));

        Ok(vec![
            status_line(&certificates.settled().await),
            status_line(&projects.settled().await),
        ])
    }

    /// Mount a section, wait for its load, and apply the requested selection.
    async fn settle_section<T: Record>(&self, fallback: Vec<T>, args: &RenderArgs) -> SectionState<T> {
        let mut section =
            MountedSection::mount(ResourceLoader::new(Arc::clone(&self.source), fallback));
        section.settled().await;

        if let Some(index) = args.select
            && !section.select(index)
        {
            info!(index, "selection out of range; no detail panel");
        }
        if args.next {
            section.select_next();
        }

        let state = section.state();
        section.unmount();
        state
    }
}

fn present<T: RecordMarkup>(
    heading: Heading<'_>,
    state: &SectionState<T>,
    ctx: &RenderContext<'_>,
    json: bool,
) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(state)?)
    } else {
        Ok(render_section(heading, state, ctx))
    }
}

fn status_line<T: Record>(state: &SectionState<T>) -> String {
    match state.error() {
        None => format!("{}: live ({} items)", T::NOUN, state.items().len()),
        Some(message) => format!(
            "{}: fallback ({} items): {message}",
            T::NOUN,
            state.items().len()
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use folio_core::{Certificate, Project};
    use folio_fetch::MockSource;
    use serde_json::json;
    use std::path::PathBuf;

    #[derive(Clone)]
    struct TestConfig {
        content: Option<PathBuf>,
    }

    impl ConfigProvider for TestConfig {
        fn api_base_url(&self) -> &str {
            "http://127.0.0.1:9"
        }

        fn content_path(&self) -> Option<PathBuf> {
            self.content.clone()
        }

        fn placeholder_image(&self) -> &str {
            "/img/none.png"
        }
    }

    fn test_config() -> TestConfig {
        TestConfig { content: None }
    }

    fn render_args(argv: &[&str]) -> RenderArgs {
        let args = CliArgs::parse_from(["folio", "render"].iter().chain(argv));
        match args.command {
            Some(BaseCommand::Render(render)) => render,
            _ => unreachable!("render args always parse to Render"),
        }
    }

    fn cli_with(source: MockSource) -> FolioCli<TestConfig> {
        FolioCli::new("folio", test_config()).with_source(Arc::new(source))
    }

    #[test]
    fn test_folio_cli_new() {
        let cli = FolioCli::new("folio", test_config()).with_version("1.2.3");
        assert_eq!(cli.name, "folio");
        assert_eq!(cli.version, "1.2.3");
        assert_eq!(cli.config().api_base_url(), "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_render_certificates_live() {
        let cli = cli_with(MockSource::new().with_json(
            Certificate::ENDPOINT,
            json!([{
                "_id": "1",
                "titre": "Cert A",
                "organisme": "Org X",
                "dateObtention": "2023-01-01",
                "lien": "",
                "images": ["/img/a.png"]
            }]),
        ));

        let html = cli.render(&render_args(&["certificates"])).await.unwrap();
        assert!(html.contains("<h2>Cert A</h2>"));
        assert!(html.contains("this.src=&#39;/img/none.png&#39;"));
        assert!(!html.contains("Using fallback data"));
    }

    #[tokio::test]
    async fn test_render_projects_fallback_with_selection() {
        let cli = cli_with(MockSource::new().with_status(Project::ENDPOINT, 500));
        let bundled = SiteContent::bundled().unwrap().projects.items;

        let html = cli
            .render(&render_args(&["projects", "--select", "1"]))
            .await
            .unwrap();
        assert!(html.contains("Using fallback data: HTTP error! status: 500"));
        assert!(html.contains(&format!("<div class=\"detail\"><h2>{}</h2>", bundled[1].title)));
    }

    #[tokio::test]
    async fn test_render_out_of_range_selection_omits_detail() {
        let cli = cli_with(
            MockSource::new().with_json(Project::ENDPOINT, json!([{"titre": "Only"}])),
        );
        let html = cli
            .render(&render_args(&["projects", "--select", "4"]))
            .await
            .unwrap();
        assert!(html.contains("card-grid"));
        assert!(!html.contains("class=\"detail\""));
    }

    #[tokio::test]
    async fn test_render_json_state() {
        let cli = cli_with(
            MockSource::new().with_json(Project::ENDPOINT, json!([{"titre": "A"}, {"titre": "B"}])),
        );
        let out = cli
            .render(&render_args(&["projects", "--next", "--json"]))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["loading"], json!(false));
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert!(value["error"].is_null());
    }

    #[tokio::test]
    async fn test_render_education_needs_no_source() {
        let cli = cli_with(MockSource::new());
        let html = cli.render(&render_args(&["education"])).await.unwrap();
        assert!(html.contains("id=\"education\""));
        assert!(html.contains("Years of Education"));
    }

    #[tokio::test]
    async fn test_render_uses_content_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(
            &path,
            r#"{"projects": {"title": "Work", "subtitle": "", "projects": []}}"#,
        )
        .unwrap();

        let cli = FolioCli::new(
            "folio",
            TestConfig {
                content: Some(path),
            },
        )
        .with_source(Arc::new(MockSource::new().with_status(Project::ENDPOINT, 503)));

        let html = cli.render(&render_args(&["projects"])).await.unwrap();
        assert!(html.contains("<h1>Work</h1>"));
        assert!(html.contains("Failed to load projects"));
    }

    #[tokio::test]
    async fn test_health_reports_each_section() {
        let cli = cli_with(
            MockSource::new()
                .with_json(Certificate::ENDPOINT, json!([]))
                .with_transport_error(Project::ENDPOINT, "connection refused"),
        );
        let lines = cli.health().await.unwrap();
        assert_eq!(lines[0], "certificates: live (0 items)");
        assert!(lines[1].starts_with("projects: fallback ("));
        assert!(lines[1].ends_with("Failed to fetch projects: connection refused"));
    }

    #[tokio::test]
    async fn test_run_commands() {
        let cli = cli_with(MockSource::new()).with_version("0.1.0");
        for argv in [vec!["folio"], vec!["folio", "version"], vec!["folio", "health"]] {
            let args = CliArgs::parse_from(argv);
            assert!(cli.run(args).await.is_ok());
        }
    }

    #[test]
    fn test_from_args_api_url_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://from-file:5000\"\n").unwrap();

        let args = CliArgs::parse_from([
            "folio",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://from-flag:8080",
        ]);
        let cli = FolioCli::from_args("folio", &args).unwrap();
        assert_eq!(cli.config().api_base_url(), "http://from-flag:8080");
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        let cli = FolioCli::new("folio", test_config());
        cli.init_logging(false, false);
        cli.init_logging(true, false);
    }
}
