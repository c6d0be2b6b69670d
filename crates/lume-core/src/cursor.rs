//! Pointer-shape selection with a per-shape handle table.
//!
//! Native cursors are created the first time a shape is requested and then
//! kept for the lifetime of the owning windowing layer. Entries are never
//! evicted or freed individually; the table holds at most one handle per
//! [`CursorShape`].

use lume_common::error::Result;
use lume_common::types::CursorShape;

/// Native pointer-shape operations.
pub trait CursorBackend {
    /// Native cursor handle.
    type Handle;

    /// Creates the native cursor for a shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform cannot create the cursor.
    fn create(&mut self, shape: CursorShape) -> Result<Self::Handle>;

    /// Makes a previously created cursor the active pointer.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the cursor.
    fn activate(&mut self, handle: &Self::Handle) -> Result<()>;
}

/// Memoizes one native handle per cursor shape.
pub struct CursorCache<B: CursorBackend> {
    backend: B,
    slots: [Option<B::Handle>; CursorShape::ALL.len()],
}

impl<B: CursorBackend> CursorCache<B> {
    /// Creates an empty table over a native backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Activates `shape`, creating its native cursor on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor cannot be created or activated. A
    /// failed creation leaves the slot empty so a later call retries.
    pub fn set_cursor(&mut self, shape: CursorShape) -> Result<()> {
        let slot = shape.index();
        let handle = match self.slots[slot].take() {
            Some(handle) => handle,
            None => {
                tracing::debug!(shape = %shape, "creating native cursor");
                self.backend.create(shape)?
            }
        };
        let activated = self.backend.activate(&handle);
        self.slots[slot] = Some(handle);
        activated
    }

    /// Returns whether a native cursor exists for `shape`.
    pub fn is_cached(&self, shape: CursorShape) -> bool {
        self.slots[shape.index()].is_some()
    }

    /// Returns the native backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the native backend mutably.
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: CursorBackend + std::fmt::Debug> std::fmt::Debug for CursorCache<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached: Vec<CursorShape> = CursorShape::ALL
            .into_iter()
            .filter(|shape| self.is_cached(*shape))
            .collect();
        f.debug_struct("CursorCache")
            .field("backend", &self.backend)
            .field("cached", &cached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use lume_common::error::LumeError;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        created: Vec<CursorShape>,
        activated: Vec<CursorShape>,
        fail_create: bool,
    }

    impl CursorBackend for Recorder {
        type Handle = CursorShape;

        fn create(&mut self, shape: CursorShape) -> Result<Self::Handle> {
            if self.fail_create {
                return Err(LumeError::platform("create cursor", "no display"));
            }
            self.created.push(shape);
            Ok(shape)
        }

        fn activate(&mut self, handle: &Self::Handle) -> Result<()> {
            self.activated.push(*handle);
            Ok(())
        }
    }

    #[test]
    fn creates_each_shape_once() {
        let mut cache = CursorCache::new(Recorder::default());
        cache.set_cursor(CursorShape::Ibeam).expect("ibeam");
        cache.set_cursor(CursorShape::Arrow).expect("arrow");
        cache.set_cursor(CursorShape::Ibeam).expect("ibeam again");

        assert_eq!(
            cache.backend().created,
            vec![CursorShape::Ibeam, CursorShape::Arrow]
        );
        assert_eq!(
            cache.backend().activated,
            vec![CursorShape::Ibeam, CursorShape::Arrow, CursorShape::Ibeam]
        );
        assert!(cache.is_cached(CursorShape::Ibeam));
        assert!(!cache.is_cached(CursorShape::Hand));
    }

    #[test]
    fn failed_creation_leaves_slot_empty() {
        let mut cache = CursorCache::new(Recorder {
            fail_create: true,
            ..Recorder::default()
        });
        assert!(cache.set_cursor(CursorShape::Hand).is_err());
        assert!(!cache.is_cached(CursorShape::Hand));

        cache.backend_mut().fail_create = false;
        cache.set_cursor(CursorShape::Hand).expect("retry");
        assert!(cache.is_cached(CursorShape::Hand));
    }
}
