use anyhow::{Context, Result, bail};
use mdpage_config::{Config, LOCAL_CONFIG_FILE};
use mdpage_engine::io;
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

/// A resolved config and where it came from.
struct Site {
    config: Config,
    /// Directory the config's relative paths were resolved against.
    base: PathBuf,
    config_file: Option<PathBuf>,
}

impl Site {
    fn new(config: Config, base: &Path, config_file: Option<PathBuf>) -> Self {
        Self {
            config: config.resolve(base),
            base: base.to_path_buf(),
            config_file,
        }
    }

    /// Paths the output directory must never contain, since it is wiped on
    /// every build.
    fn sources(&self) -> Vec<(&'static str, &Path)> {
        let mut sources = vec![
            ("site directory", self.base.as_path()),
            ("content directory", self.config.content_path.as_path()),
            ("static directory", self.config.static_path.as_path()),
            ("template", self.config.template_path.as_path()),
        ];
        if let Some(file) = &self.config_file {
            sources.push(("config file", file.as_path()));
        }
        sources
    }
}

/// Picks the config for this run and anchors its relative paths.
///
/// An explicit path must exist and resolves against its own directory.
/// Otherwise `./mdpage.toml`, then the user config, then the defaults are
/// tried, all resolved against the working directory.
fn load_config(explicit: Option<PathBuf>, cwd: &Path) -> Result<Site> {
    if let Some(path) = explicit {
        let Some(config) = Config::load_from_path(&path)? else {
            bail!("Config file '{}' not found", path.display());
        };
        log::info!("Using config file {}", path.display());
        let base = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(cwd)
            .to_path_buf();
        return Ok(Site::new(config, &base, Some(path)));
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if let Some(config) = Config::load_from_path(&local)? {
        log::info!("Using config file {}", local.display());
        return Ok(Site::new(config, cwd, Some(local)));
    }

    match Config::load()? {
        Some(config) => {
            let path = Config::config_path();
            log::info!("Using config file {}", path.display());
            Ok(Site::new(config, cwd, Some(path)))
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Site::new(Config::default(), cwd, None))
        }
    }
}

/// Fails if resetting the output directory would delete any site source.
///
/// Paths are compared canonicalized. An output directory that does not
/// exist yet has nothing to delete.
fn check_output_path(site: &Site) -> Result<()> {
    let output_path = &site.config.output_path;
    let Ok(output) = output_path.canonicalize() else {
        return Ok(());
    };

    for (name, path) in site.sources() {
        if let Ok(source) = path.canonicalize()
            && source.starts_with(&output)
        {
            bail!(
                "Refusing to use output directory {}: it contains the {name} {}",
                output_path.display(),
                path.display()
            );
        }
    }
    Ok(())
}

/// Rebuilds the output directory from scratch.
fn build_site(site: &Site) -> Result<()> {
    check_output_path(site)?;
    let config = &site.config;

    io::reset_directory(&config.output_path).with_context(|| {
        format!(
            "Failed to reset output directory {}",
            config.output_path.display()
        )
    })?;

    if config.static_path.is_dir() {
        let copied = io::copy_directory(&config.static_path, &config.output_path)?;
        log::info!("Copied {copied} static files");
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_path.display()
        );
    }

    let pages = io::generate_pages_recursive(
        &config.content_path,
        &config.template_path,
        &config.output_path,
    )?;
    log::info!(
        "Generated {} pages into {}",
        pages.len(),
        config.output_path.display()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let explicit = match args.len() {
        1 => None,
        2 => Some(PathBuf::from(&args[1])),
        _ => {
            eprintln!("Usage: {} [config-file]", args[0]);
            process::exit(1);
        }
    };

    let result = env::current_dir()
        .context("Failed to determine working directory")
        .and_then(|cwd| load_config(explicit, &cwd))
        .and_then(|site| build_site(&site));

    if let Err(e) = result {
        log::error!("{e:#}");
        process::exit(1);
    }
}
