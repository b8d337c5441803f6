use cardsmith_config::Config;
use tokio_util::sync::CancellationToken;

pub struct AppState {
    pub config: Config,
    /// Cancelled on Ctrl+C; pipelines check it between notes
    pub cancel: CancellationToken,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancel: CancellationToken::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
