//! ProjectStore - observable, append-only project list.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, RwLock};

use projectboard_models::{Project, ProjectId};

use crate::error::{Result, StoreError};

/// Callback invoked with a copy of the full project list after every
/// mutation.
pub type Listener = Arc<dyn Fn(&[Project]) + Send + Sync>;

/// Ordered, append-only list of projects with listener notification.
///
/// # Concurrency
///
/// - **`Arc<RwLock<Vec<Project>>>`**: the list is read often (snapshots)
///   and written once per accepted submission.
///
/// - **`Arc<RwLock<Vec<Listener>>>`**: the registry is appended to
///   occasionally; notification iterates a clone of it taken under the
///   read lock, and callbacks run with both locks released. A listener
///   may therefore subscribe further listeners without deadlock; they
///   join from the next mutation.
pub struct ProjectStore {
    /// Projects in insertion order.
    projects: Arc<RwLock<Vec<Project>>>,
    /// Listeners in registration order.
    listeners: Arc<RwLock<Vec<Listener>>>,
}

impl ProjectStore {
    /// Creates an empty store with no listeners.
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(Vec::new())),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Adds a new project and synchronously notifies every listener.
    ///
    /// The project is constructed here with a fresh identifier and
    /// `Active` status, then appended to the end of the list. Listeners
    /// run in registration order on the calling thread, each receiving
    /// the same detached copy of the full list. Inputs are assumed
    /// already validated; the store checks nothing.
    ///
    /// # Returns
    ///
    /// The identifier of the added project.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<ProjectId> {
        let project = Project::new(title, description, people);
        let project_id = project.id.clone();

        let snapshot = {
            let mut projects = self
                .projects
                .write()
                .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
            projects.push(project);
            projects.clone()
        };

        self.notify(&snapshot);

        Ok(project_id)
    }

    /// Registers a listener for future mutations.
    ///
    /// Append-only: no replay of past state, no deduplication, no
    /// unsubscribe. The listener stays registered for the lifetime of
    /// the store.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&[Project]) + Send + Sync + 'static,
    {
        if let Ok(mut registry) = self.listeners.write() {
            registry.push(Arc::new(listener));
        }
    }

    /// Registers a listener that forwards each snapshot into a channel.
    ///
    /// A dropped receiver leaves the listener in place; sends to it are
    /// ignored.
    pub fn subscribe_channel(&self) -> Receiver<Vec<Project>> {
        let (tx, rx) = mpsc::channel();

        self.subscribe(move |projects: &[Project]| {
            let _ = tx.send(projects.to_vec());
        });

        rx
    }

    /// Invokes every listener with the given snapshot.
    ///
    /// The registry is cloned first so listeners run without any lock
    /// held.
    fn notify(&self, snapshot: &[Project]) {
        let listeners: Vec<Listener> = match self.listeners.read() {
            Ok(registry) => registry.clone(),
            Err(_) => return,
        };

        for listener in listeners {
            listener(snapshot);
        }
    }

    /// Returns a copy of the current project list, without notifying.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects
            .read()
            .map(|projects| projects.clone())
            .unwrap_or_default()
    }

    /// Returns the number of projects in the store.
    pub fn len(&self) -> usize {
        self.projects.read().map(|projects| projects.len()).unwrap_or(0)
    }

    /// Returns true if the store holds no projects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectboard_models::ProjectStatus;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_store_starts_empty() {
        let store = ProjectStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_add_project_appends() {
        let store = ProjectStore::new();

        let id = store.add_project("First", "The first project", 2).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, id);
        assert_eq!(snapshot[0].title, "First");
        assert_eq!(snapshot[0].description, "The first project");
        assert_eq!(snapshot[0].people, 2);
        assert_eq!(snapshot[0].status, ProjectStatus::Active);
    }

    #[test]
    fn test_add_preserves_order_and_distinct_ids() {
        let store = ProjectStore::new();

        for i in 0..5 {
            store
                .add_project(format!("Project {}", i), "Ordered addition", 1)
                .unwrap();
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 5);
        for (i, project) in snapshot.iter().enumerate() {
            assert_eq!(project.title, format!("Project {}", i));
        }

        let ids: HashSet<_> = snapshot.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_subscribe_receives_snapshot() {
        let store = ProjectStore::new();
        let rx = store.subscribe_channel();

        store.add_project("Watched", "Subscriber sees this", 1).unwrap();

        let snapshot = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "Watched");
    }

    #[test]
    fn test_every_mutation_notifies() {
        let store = ProjectStore::new();
        let rx = store.subscribe_channel();

        for i in 0..3 {
            store.add_project(format!("P{}", i), "Counting along", 1).unwrap();
        }

        for expected_len in 1..=3 {
            let snapshot = rx.recv_timeout(Duration::from_secs(1)).unwrap();
            assert_eq!(snapshot.len(), expected_len);
        }
    }

    #[test]
    fn test_no_replay_for_late_subscriber() {
        let store = ProjectStore::new();

        store.add_project("Early", "Added before subscribing", 1).unwrap();

        let rx = store.subscribe_channel();
        assert!(rx.try_recv().is_err());

        // The next mutation delivers the full list, past entries included.
        store.add_project("Late", "Added after subscribing", 1).unwrap();
        let snapshot = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "Early");
        assert_eq!(snapshot[1].title, "Late");
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let store = ProjectStore::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = order.clone();
        store.subscribe(move |_| first.lock().unwrap().push("first"));

        let second = order.clone();
        store.subscribe(move |_| second.lock().unwrap().push("second"));

        store.add_project("Ordered", "Notification order", 1).unwrap();

        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_all_listeners_receive_identical_snapshot() {
        let store = ProjectStore::new();
        let rx1 = store.subscribe_channel();
        let rx2 = store.subscribe_channel();

        store.add_project("Shared", "Both see one entry", 3).unwrap();

        let s1 = rx1.recv_timeout(Duration::from_secs(1)).unwrap();
        let s2 = rx2.recv_timeout(Duration::from_secs(1)).unwrap();

        assert_eq!(s1.len(), 1);
        assert_eq!(s2.len(), 1);
        assert_eq!(s1[0].id, s2[0].id);
        assert_eq!(s1[0].title, s2[0].title);
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let store = ProjectStore::new();
        let rx = store.subscribe_channel();

        store.add_project("One", "First of two", 1).unwrap();
        let first = rx.recv_timeout(Duration::from_secs(1)).unwrap();

        store.add_project("Two", "Second of two", 1).unwrap();

        // The earlier snapshot is unaffected by the later mutation.
        assert_eq!(first.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_subscribe_from_listener_does_not_deadlock() {
        let store = Arc::new(ProjectStore::new());
        let inner_calls = Arc::new(AtomicUsize::new(0));
        let registered = Arc::new(AtomicBool::new(false));

        let s = store.clone();
        let calls = inner_calls.clone();
        let flag = registered.clone();
        store.subscribe(move |_| {
            if !flag.swap(true, Ordering::SeqCst) {
                let calls = calls.clone();
                s.subscribe(move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        // First mutation registers the inner listener; it must not see
        // this notification.
        store.add_project("First", "Registers a listener", 1).unwrap();
        assert_eq!(inner_calls.load(Ordering::SeqCst), 0);

        store.add_project("Second", "Reaches the new listener", 1).unwrap();
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let store = ProjectStore::new();

        let rx = store.subscribe_channel();
        drop(rx);

        // Adding must not fail or panic with a disconnected channel.
        store.add_project("Orphan", "No one listening", 1).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_thread_safe_add() {
        let store = Arc::new(ProjectStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let s = store.clone();
            let handle = thread::spawn(move || {
                s.add_project(format!("Project {}", i), "Added from a thread", 1)
                    .unwrap();
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 10);

        let ids: HashSet<_> = store
            .snapshot()
            .iter()
            .map(|p| p.id.as_str().to_string())
            .collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_subscriber_thread_receives() {
        let store = Arc::new(ProjectStore::new());
        let received = Arc::new(AtomicUsize::new(0));

        let rx = store.subscribe_channel();
        let count = received.clone();
        let subscriber = thread::spawn(move || {
            while rx.recv_timeout(Duration::from_millis(500)).is_ok() {
                count.fetch_add(1, Ordering::SeqCst);
            }
        });

        for i in 0..5 {
            store
                .add_project(format!("Project {}", i), "Cross-thread delivery", 1)
                .unwrap();
        }

        drop(store);
        subscriber.join().unwrap();

        assert_eq!(received.load(Ordering::SeqCst), 5);
    }
}
