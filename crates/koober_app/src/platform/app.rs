use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use koober_core::LaunchAction;
use koober_engine::{
    AuthRemoteApi, FakeAuthRemoteApi, FileUserSessionDataStore, KooberCloudAuthRemoteApi,
    KooberUserSessionRepository, Store,
};
use koober_logging::{koober_info, koober_warn};

use super::commands::{self, Command};
use super::config::{self, AppConfig};
use super::logging;
use super::render::Presenter;

pub fn run_app() -> anyhow::Result<()> {
    let config = config::load_default()?;
    logging::initialize(config.log_destination, config.level()?);
    koober_info!("Starting with config {:?}", config);

    let store = Store::new(build_repository(&config)?)?;

    // Render every published state on its own thread, like a UI main loop.
    let subscription = store.subscribe();
    let renderer = thread::spawn(move || {
        let mut presenter = Presenter::new();
        while let Some(state) = subscription.recv() {
            for line in presenter.present(&state.view()) {
                println!("{line}");
            }
        }
    });

    store.dispatch(LaunchAction::Started);

    for line in io::stdin().lock().lines() {
        let line = line?;
        match commands::parse(&line) {
            Ok(Command::Dispatch(action)) => store.dispatch(action),
            Ok(Command::Dismiss) => {
                match store.state().and_then(|state| commands::dismiss_action(&state.view())) {
                    Some(action) => store.dispatch(action),
                    None => println!("nothing to dismiss"),
                }
            }
            Ok(Command::Help) => println!("{}", commands::HELP),
            Ok(Command::Quit) => break,
            Err(err) => eprintln!("{err}"),
        }
    }

    store.shutdown();
    if renderer.join().is_err() {
        koober_warn!("Renderer thread panicked");
    }
    Ok(())
}

fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<KooberUserSessionRepository>> {
    let remote_api: Arc<dyn AuthRemoteApi> = if config.use_fake_remote {
        koober_info!("Using offline account {}", FakeAuthRemoteApi::EMAIL);
        Arc::new(FakeAuthRemoteApi::new())
    } else {
        Arc::new(KooberCloudAuthRemoteApi::new(config.remote_settings()?)?)
    };
    let data_store = Arc::new(FileUserSessionDataStore::new(config.session_dir.clone()));
    Ok(Arc::new(KooberUserSessionRepository::new(
        remote_api, data_store,
    )))
}
