use notes_server::{config, lifecycle, observability, AppConfig, Binding, HttpServer, Shutdown};

#[tokio::main]
async fn main() {
    // Configuration errors are the only fatal-with-usage path: print what
    // went wrong plus every recognized variable, then exit non-zero.
    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration error: {error}");
            eprintln!();
            eprint!("{}", config::env::describe());
            std::process::exit(1);
        }
    };

    observability::logging::init(&app_config.log_level);

    tracing::info!(
        listen = ?app_config.listen.kind,
        bind_ip = %app_config.listen.bind_ip,
        port = %app_config.listen.port,
        "configuration loaded"
    );

    // Listener construction is part of the fatal startup path: a process
    // that cannot accept connections must not linger.
    let binding = match Binding::bind(&app_config.listen).await {
        Ok(binding) => binding,
        Err(error) => {
            tracing::error!(%error, "failed to bind listener");
            std::process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        lifecycle::signals::wait_for_termination().await;
        trigger.trigger();
    });

    let server = HttpServer::new(app_config);
    if let Err(error) = server.run(binding, shutdown).await {
        tracing::error!(%error, "server terminated with error");
        std::process::exit(1);
    }

    tracing::info!("shutdown complete");
}
