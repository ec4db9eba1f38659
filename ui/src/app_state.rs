use details::prefs::user_prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }
}
