//! Subscribe-able state container.
//!
//! Replaces cross-component notification via a global event bus: observers
//! subscribe to the store and resynchronize when the value changes. Clones
//! share the same underlying channel.

use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Subscribe to changes. The receiver observes every value set after
    /// subscription (plus the current one via `borrow`).
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_share_state_between_clones() {
        let store = Store::new(0u32);
        let clone = store.clone();
        store.set(7);
        assert_eq!(clone.get(), 7);
    }

    #[tokio::test]
    async fn should_notify_subscribers_on_change() {
        let store = Store::new("initial".to_owned());
        let mut rx = store.subscribe();
        store.set("updated".to_owned());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "updated");
    }

    #[tokio::test]
    async fn should_apply_in_place_updates() {
        let store = Store::new(vec![1, 2]);
        store.update(|v| v.push(3));
        assert_eq!(store.get(), vec![1, 2, 3]);
    }
}
