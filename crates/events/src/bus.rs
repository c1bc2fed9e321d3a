use super::models::{AppEvent, EventBus};
use colored::Colorize;
use std::sync::Arc;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "Resource Server Utils".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Ready { addr, context_path } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Server ".white(), addr.cyan());
                println!("  {} {}", "Context".white(), context_path.blue());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }
            AppEvent::Shutdown => {
                println!("\n{}", "Server shutting down".red());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { contexts_count } => {
                if contexts_count == 0 {
                    println!("  {} No contexts deployed, resources resolve locally", "⚠".yellow());
                } else {
                    println!("  {} {} context(s)", "✓".green(), contexts_count.to_string().cyan());
                }
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }

            // Container
            AppEvent::ContextDeployed { path, name } => {
                if self.silent_mode {
                    tracing::debug!("Deployed context {}", path);
                } else {
                    match name {
                        Some(name) => println!("  {} {} ({})", "+".green(), path.cyan(), name.dimmed()),
                        None => println!("  {} {}", "+".green(), path.cyan()),
                    }
                }
            }
            AppEvent::ContextDisabled { path } => {
                tracing::debug!("Skipping disabled context {}", path);
            }
            AppEvent::ResourceContextSelected { path, source } => {
                println!("  {} Resources served from {} ({})", "→".dimmed(), path.cyan(), source.dimmed());
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
