//! `license-csv` — resolve the license of every dependency and write a CSV report.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Auto-detect ecosystems ([`detector::detect_ecosystems`]).
//! 4. Discover modules from each ecosystem's manifests ([`analyzer`]).
//! 5. Look up every module's license concurrently ([`registry`]); each task
//!    reports into a shared [`store::ResultStore`].
//! 6. Snapshot the store, classify and sort, write the CSV ([`report`]).

mod analyzer;
mod cli;
mod config;
mod detector;
mod license;
mod models;
mod registry;
mod report;
mod store;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use analyzer::Analyzer;
use cli::Cli;
use config::{load_config, Config};
use detector::detect_ecosystems;
use license::spdx::license_for;
use models::{Ecosystem, License, Module, Outcome};
use store::ResultStore;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Resolve project path
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    // Load config
    let config = load_config(&path, cli.config.as_deref())?;

    // Detect ecosystems (always automatic; --exclude-lang opts out)
    let excluded: Vec<Ecosystem> = cli.exclude_lang.iter().map(Into::into).collect();

    let ecosystems: Vec<Ecosystem> = detect_ecosystems(&path)
        .into_iter()
        .filter(|e| !excluded.contains(e))
        .collect();

    if ecosystems.is_empty() {
        eprintln!(
            "No supported project manifests found in {}",
            path.display()
        );
        std::process::exit(1);
    }

    // Discover modules from each ecosystem's manifests
    let mut all_modules: Vec<(Ecosystem, Module)> = Vec::new();

    for ecosystem in &ecosystems {
        let modules = match ecosystem {
            Ecosystem::Go => analyzer::go::GoAnalyzer::new().analyze(&path)?,
            Ecosystem::Rust => analyzer::rust::RustAnalyzer::new().analyze(&path)?,
        };

        if !cli.quiet {
            eprintln!(
                "  {} {} {} modules",
                "→".cyan(),
                ecosystem,
                modules.len()
            );
        }

        all_modules.extend(modules.into_iter().map(|m| (*ecosystem, m)));
    }

    // Look up licenses; every task reports into the shared store
    let store = Arc::new(ResultStore::new());
    let resolver = Arc::new(Resolver::new(&config)?);
    let pb = if cli.quiet {
        None
    } else {
        Some(progress_bar(all_modules.len())?)
    };
    resolve_all(
        &store,
        all_modules,
        config.resolve.batch_size,
        pb.as_ref(),
        move |ecosystem, module| {
            let resolver = Arc::clone(&resolver);
            async move { resolver.resolve(ecosystem, &module).await }
        },
    )
    .await;
    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    if store.is_empty() {
        log::info!("no modules discovered in {}", path.display());
    } else {
        log::debug!("collected outcomes for {} modules", store.len());
    }

    // Snapshot, classify and write the report
    let out_path = cli.output.unwrap_or(config.output.path);
    let records = report::csv::render(&store.snapshot(), &out_path)?;

    // Summary
    let not_found = records.iter().filter(|r| r.spdx == "NOT-FOUND").count();
    let summary = format!(
        "Total: {}  Found: {}  Not found: {}",
        records.len(),
        (records.len() - not_found).to_string().green(),
        not_found.to_string().yellow(),
    );
    if cli.quiet {
        eprintln!("{}", summary);
    } else {
        eprintln!("  {} wrote {}", "✓".green(), out_path.display());
        eprintln!("  {}", summary);
    }

    Ok(())
}

/// Shared by every lookup task.
struct Resolver {
    client: reqwest::Client,
    registry: String,
    overrides: HashMap<String, String>,
}

impl Resolver {
    fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.resolve.timeout_secs))
            .build()?;

        Ok(Resolver {
            client,
            registry: config.resolve.registry.clone(),
            overrides: config.overrides.clone(),
        })
    }

    /// A 404 or an empty license list means the lookup ran and found nothing;
    /// any failure to complete the lookup is a [`Outcome::LookupError`].
    async fn resolve(&self, ecosystem: Ecosystem, module: &Module) -> Outcome {
        if let Some(spdx) = self.overrides.get(&module.path) {
            return Outcome::License(license_for(spdx));
        }

        match registry::deps_dev::fetch_license(&self.client, &self.registry, ecosystem, module)
            .await
        {
            Ok(Some(expr)) => Outcome::License(license_for(&expr)),
            Ok(None) => Outcome::License(License::default()),
            Err(e) => {
                log::warn!("license lookup failed for {}: {:#}", module, e);
                Outcome::LookupError
            }
        }
    }
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Run `lookup` for every module in batches of concurrently spawned tasks.
///
/// A module is marked pending before its task starts, so a task that dies
/// without reporting surfaces when the report is built.
async fn resolve_all<F, Fut>(
    store: &Arc<ResultStore>,
    modules: Vec<(Ecosystem, Module)>,
    batch_size: usize,
    pb: Option<&ProgressBar>,
    lookup: F,
) where
    F: Fn(Ecosystem, Module) -> Fut,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    use futures::future::join_all;

    for batch in modules.chunks(batch_size.max(1)) {
        let handles: Vec<_> = batch
            .iter()
            .cloned()
            .map(|(ecosystem, module)| {
                store.start(&module);
                let store = Arc::clone(store);
                let pending = lookup(ecosystem, module.clone());
                tokio::spawn(async move {
                    let outcome = pending.await;
                    store.report(&module, outcome);
                })
            })
            .collect();

        for result in join_all(handles).await {
            if let Err(e) = result {
                log::error!("lookup task failed: {}", e);
            }
            if let Some(pb) = pb {
                pb.inc(1);
            }
        }
    }
}
