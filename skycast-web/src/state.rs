use skycast_core::OpenMeteo;

/// Shared handler state.
///
/// The client holds no mutable state, so concurrent requests each get an
/// independent pipeline invocation over the same shared handle.
#[derive(Clone)]
pub struct AppState {
    pub weather: OpenMeteo,
}
