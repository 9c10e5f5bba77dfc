use std::any::{Any, TypeId};

/// Capability set every concrete holder implements: report the stored
/// type's identity and produce an independent deep copy of itself.
///
/// The box never inspects a stored tag; type checks downcast the cell
/// object itself, so the stored representation and the reported type
/// cannot drift apart.
pub(crate) trait AnyCell: Any {
    /// The `TypeId` of the concrete stored type.
    fn stored_type_id(&self) -> TypeId;

    /// Diagnostic name of the concrete stored type.
    fn stored_type_name(&self) -> &'static str;

    /// Deep-copies this cell, value included.
    fn clone_cell(&self) -> Box<dyn AnyCell>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// The one concrete holder: a cell owning a single value of type T.
///
/// A cell's type is fixed at construction; replacing a box's contents
/// always builds a new cell rather than mutating this one in place.
pub(crate) struct Cell<T> {
    pub(crate) value: T,
}

impl<T: Clone + 'static> Cell<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone + 'static> AnyCell for Cell<T> {
    fn stored_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn stored_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn clone_cell(&self) -> Box<dyn AnyCell> {
        Box::new(Cell {
            value: self.value.clone(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
