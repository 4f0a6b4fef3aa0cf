// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use namespace_policy::config::Config;
use namespace_policy::controllers::NamespaceController;
use namespace_policy::kubernetes::KubeClusterApi;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting namespace policy operator");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: resync_interval={}s",
        config.resync_interval.as_secs()
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let controller = NamespaceController::new(KubeClusterApi::new(client), &config);
    let stop = CancellationToken::new();
    let tracker = TaskTracker::new();

    let controller_stop = stop.clone();
    tracker.spawn(async move {
        if let Err(e) = controller.run(controller_stop).await {
            error!("Namespace controller failed: {}", e);
        }
    });
    tracker.close();

    let signal_result = shutdown_signal().await;
    stop.cancel();
    tracker.wait().await;

    info!("Namespace policy operator stopped");
    Ok(signal_result?)
}

/// Wait for SIGTERM or SIGINT
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            res = signal::ctrl_c() => {
                info!("Received CTRL+C signal");
                res
            }
            _ = terminate.recv() => {
                info!("Received SIGTERM signal");
                Ok(())
            }
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await?;
        info!("Received CTRL+C signal");
        Ok(())
    }
}
