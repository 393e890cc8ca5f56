use dioxus::prelude::*;
use shared_types::{AppError, MapConfig, SpotStore};

/// Spot data shared by both dashboards.
///
/// Provided once by the app shell, so bookings made on the user page are
/// still known when the admin page filters by date.
#[derive(Clone, Copy)]
pub struct SpotsState {
    pub store: Signal<SpotStore>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    fetch: Resource<()>,
}

impl SpotsState {
    /// Re-issue the listing request after a failure.
    pub fn retry(&mut self) {
        self.error.set(None);
        self.fetch.restart();
    }

    pub fn dismiss_error(&mut self) {
        self.error.set(None);
    }
}

/// Fetch the spot listing once and provide it to every route below.
///
/// A failure leaves the store empty, clears the loading flag and records a
/// friendly message for the page's error banner.
pub fn use_spots_provider() -> SpotsState {
    let mut store = use_signal(SpotStore::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    let fetch = use_resource(move || async move {
        loading.set(true);
        match server::api::list_spots().await {
            Ok(spots) => store.set(SpotStore::new(spots)),
            Err(e) => {
                tracing::warn!(error = %e, "Spot listing failed");
                store.set(SpotStore::default());
                error.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    });

    use_context_provider(|| SpotsState {
        store,
        loading,
        error,
        fetch,
    })
}

/// The shell's [`SpotsState`].
pub fn use_spots() -> SpotsState {
    use_context::<SpotsState>()
}

/// Map settings from the server, falling back to the built-in defaults.
///
/// `None` until the first response arrives.
pub fn use_map_config() -> Memo<Option<MapConfig>> {
    let config = use_resource(|| async move { server::api::get_map_config().await });
    use_memo(move || {
        config
            .read()
            .as_ref()
            .map(|result| result.clone().unwrap_or_default())
    })
}
