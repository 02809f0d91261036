//! Bound-entity state for the helper.

/// The entity instance currently associated with a helper, plus the factory
/// that produces a clean instance per row during multi-row reads.
pub(crate) struct EntityBinder<T> {
    current: T,
    factory: Box<dyn Fn() -> T>,
}

impl<T> EntityBinder<T> {
    pub(crate) fn new(initial: T, factory: impl Fn() -> T + 'static) -> Self {
        Self {
            current: initial,
            factory: Box::new(factory),
        }
    }

    pub(crate) fn current(&self) -> &T {
        &self.current
    }

    pub(crate) fn current_mut(&mut self) -> &mut T {
        &mut self.current
    }

    /// Swap in a new bound entity, returning the previous one.
    pub(crate) fn replace(&mut self, entity: T) -> T {
        std::mem::replace(&mut self.current, entity)
    }

    /// A fresh instance from the factory.
    pub(crate) fn fresh(&self) -> T {
        (self.factory)()
    }
}
