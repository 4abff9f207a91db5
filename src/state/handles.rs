/// Display handle registry
///
/// A display handle is a revocable reference that lets the views draw an
/// uploaded image without re-reading its bytes. Handles stay alive until
/// they are explicitly released; every site that replaces or clears an
/// image must release the handle it held.

use std::collections::HashMap;

use iced::widget::image::Handle;

/// Opaque reference to a registered display handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayHandleId(u64);

#[derive(Default)]
pub struct DisplayHandles {
    live: HashMap<DisplayHandleId, Handle>,
    next_id: u64,
}

impl DisplayHandles {
    /// Register a handle for `bytes` and return its id
    pub fn create(&mut self, bytes: &[u8]) -> DisplayHandleId {
        let id = DisplayHandleId(self.next_id);
        self.next_id += 1;

        self.live.insert(id, Handle::from_bytes(bytes.to_vec()));
        tracing::debug!("🖼️  Created display handle {:?} ({} bytes)", id, bytes.len());
        id
    }

    /// Release a handle. Returns false if it was not live.
    pub fn release(&mut self, id: DisplayHandleId) -> bool {
        let released = self.live.remove(&id).is_some();
        if released {
            tracing::debug!("🧹 Released display handle {:?}", id);
        } else {
            tracing::warn!("⚠️  Display handle {:?} released twice", id);
        }
        released
    }

    /// Look up a live handle
    pub fn get(&self, id: DisplayHandleId) -> Option<&Handle> {
        self.live.get(&id)
    }

    /// Number of handles not yet released
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl std::fmt::Debug for DisplayHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayHandles")
            .field("live", &self.live.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_release() {
        let mut handles = DisplayHandles::default();

        let a = handles.create(b"first");
        let b = handles.create(b"second");

        assert_ne!(a, b);
        assert_eq!(handles.live_count(), 2);
        assert!(handles.get(a).is_some());

        assert!(handles.release(a));
        assert!(handles.get(a).is_none());
        assert_eq!(handles.live_count(), 1);
    }

    #[test]
    fn test_double_release_is_reported() {
        let mut handles = DisplayHandles::default();
        let id = handles.create(b"bytes");

        assert!(handles.release(id));
        assert!(!handles.release(id));
        assert_eq!(handles.live_count(), 0);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut handles = DisplayHandles::default();
        let first = handles.create(b"a");
        handles.release(first);

        let second = handles.create(b"a");
        assert_ne!(first, second);
    }
}
