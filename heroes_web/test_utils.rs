#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    };

    use heroes_app::HeroService;

    use crate::{
        app_state::AppState,
        confirm::{ConfirmDialogData, Confirmer},
        notification::{Notification, NotificationKind, Notifier},
        routes::{Navigator, Route},
    };

    #[derive(Default)]
    pub struct RecordingNotifier {
        notifications: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub fn all(&self) -> Vec<Notification> {
            self.notifications.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<Notification> {
            self.notifications.lock().unwrap().last().cloned()
        }

        pub fn messages(&self, kind: NotificationKind) -> Vec<String> {
            self.all()
                .into_iter()
                .filter(|n| n.kind == kind)
                .map(|n| n.message)
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.notifications.lock().unwrap().push(notification);
        }
    }

    /// Answers every confirmation with a preset value and keeps the requests.
    pub struct ScriptedConfirmer {
        answer: AtomicBool,
        requests: Mutex<Vec<ConfirmDialogData>>,
    }

    impl ScriptedConfirmer {
        pub fn new(answer: bool) -> Self {
            Self {
                answer: AtomicBool::new(answer),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn answer(&self, answer: bool) {
            self.answer.store(answer, Ordering::SeqCst);
        }

        pub fn requests(&self) -> Vec<ConfirmDialogData> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Confirmer for ScriptedConfirmer {
        async fn confirm(&self, data: ConfirmDialogData) -> bool {
            self.requests.lock().unwrap().push(data);
            self.answer.load(Ordering::SeqCst)
        }
    }

    #[derive(Default)]
    pub struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        pub fn routes(&self) -> Vec<Route> {
            self.routes.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<Route> {
            self.routes.lock().unwrap().last().cloned()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes.lock().unwrap().push(route);
        }
    }

    pub struct TestCollaborators {
        pub notifier: Arc<RecordingNotifier>,
        pub confirmer: Arc<ScriptedConfirmer>,
        pub navigator: Arc<RecordingNavigator>,
    }

    /// Wires an `AppState` with recording collaborators. The confirmer
    /// accepts by default.
    pub fn setup_app_state(hero_service: Arc<HeroService>) -> (AppState, TestCollaborators) {
        let collaborators = TestCollaborators {
            notifier: Arc::new(RecordingNotifier::default()),
            confirmer: Arc::new(ScriptedConfirmer::new(true)),
            navigator: Arc::new(RecordingNavigator::default()),
        };
        let state = AppState::new(
            hero_service,
            collaborators.notifier.clone(),
            collaborators.confirmer.clone(),
            collaborators.navigator.clone(),
        );
        (state, collaborators)
    }
}
