// SPDX-License-Identifier: MPL-2.0
//! Scripted toast session printed to the terminal.
//!
//! ```text
//! toast-queue [--config PATH] [--sound] [--max N] [--position P]
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use toast_queue::application::port::{Effects, NoEffects};
use toast_queue::config::{self, Position, ToastConfig};
use toast_queue::error::Result;
use toast_queue::infrastructure::{SystemClock, ToneEffects};
use toast_queue::notifications::{Kind, PromiseMessages, ToastOptions, ToastService};
use tracing_subscriber::EnvFilter;

struct Flags {
    config_path: Option<PathBuf>,
    sound: bool,
    max: Option<usize>,
    position: Option<Position>,
}

fn parse_flags() -> std::result::Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Flags {
        config_path: args.opt_value_from_str("--config")?,
        sound: args.contains("--sound"),
        max: args.opt_value_from_str("--max")?,
        position: args.opt_value_from_str("--position")?,
    })
}

fn load_config(flags: &Flags) -> Result<ToastConfig> {
    let mut config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if flags.sound {
        config.enable_sound = true;
    }
    if let Some(max) = flags.max {
        config.max_notifications = max;
    }
    if let Some(position) = flags.position {
        config.position = position;
    }
    Ok(config.sanitized())
}

fn print_queue(toasts: &[toast_queue::notifications::Notification]) {
    if toasts.is_empty() {
        println!("  (no toasts)");
        return;
    }
    for toast in toasts {
        match toast.message() {
            Some(message) => println!("  {} {} - {}", toast.icon(), toast.title(), message),
            None => println!("  {} {}", toast.icon(), toast.title()),
        }
    }
}

async fn run_session(service: ToastService) -> Result<()> {
    service.success("Profile loaded", ToastOptions::new())?;
    let hovered = service.info(
        "Tip: press Ctrl+K for the command palette",
        ToastOptions::new(),
    )?;
    service.pause(&hovered);

    service.with_action(
        Kind::Warning,
        "Message deleted",
        "Undo",
        || println!("  -> undo requested"),
        ToastOptions::new().duration_ms(8000),
    )?;

    let messages = PromiseMessages::new("Sending message", "Message sent", "Could not send")?;
    let sent: std::result::Result<(), String> = service
        .promise(
            async {
                tokio::time::sleep(Duration::from_millis(800)).await;
                Err("mail server unreachable".to_string())
            },
            messages,
        )
        .await;
    if let Err(err) = sent {
        tracing::info!(error = %err, "contact form failed as scripted");
    }

    for i in 1..=4 {
        service.info(format!("Burst {i}"), ToastOptions::new().duration_ms(1500))?;
    }

    tokio::time::sleep(Duration::from_millis(2000)).await;
    service.resume(&hovered);
    tokio::time::sleep(Duration::from_millis(4500)).await;

    let stats = service.stats();
    println!(
        "published {} | timed out {} | evicted {} | active {}",
        stats.published, stats.dismissed.timeout, stats.dismissed.capacity, stats.active
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Invalid arguments: {err}");
            std::process::exit(2);
        }
    };
    let config = match load_config(&flags) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default configuration");
            ToastConfig::default()
        }
    };
    tracing::info!(
        position = %config.position,
        max = config.max_notifications,
        sound = config.enable_sound,
        "starting toast session"
    );

    let effects: Arc<dyn Effects> = if config.enable_sound {
        Arc::new(ToneEffects::new())
    } else {
        Arc::new(NoEffects)
    };
    let service = ToastService::with_ports(config, Arc::new(SystemClock), effects);
    let _printer = service.subscribe(|toasts| {
        println!("queue:");
        print_queue(toasts);
    });

    let driver = tokio::spawn({
        let service = service.clone();
        async move { service.run_timers().await }
    });

    if let Err(err) = run_session(service.clone()).await {
        tracing::error!(error = %err, "toast session failed");
    }

    service.shutdown();
    if let Err(err) = driver.await {
        tracing::error!(error = %err, "timer driver panicked");
    }
}
