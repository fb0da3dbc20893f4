//! RAII-style scope guards for Interpreter environment management.
//!
//! The [`ScopedInterpreter`] guard pops its scope when dropped, so a block
//! that exits early through `?` (or unwinds) never leaves its scope behind.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! the body can call any interpreter method without a borrow conflict on
//! the environment.
//!
//! ```text
//! self.with_env_scope(|scoped| {
//!     body.iter().try_for_each(|stmt| scoped.execute(stmt))
//! })
//! ```

use std::ops::{Deref, DerefMut};

use tracing::trace;

use super::Interpreter;

/// RAII guard that pops one environment scope on drop.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
        trace!(depth = self.interpreter.env.depth(), "leave block");
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope and return a guard that pops it on drop.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a new environment scope.
    ///
    /// The scope is popped when `f` returns, including by early return or
    /// panic.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}

#[cfg(test)]
mod tests {
    use crate::{buffer_handler, Binding, Interpreter, Value};

    #[test]
    fn scope_is_popped_when_guard_drops() {
        let mut interpreter = Interpreter::with_print_handler(buffer_handler());
        {
            let scoped = interpreter.scoped();
            assert_eq!(scoped.env().depth(), 2);
        }
        assert_eq!(interpreter.env().depth(), 1);
    }

    #[test]
    fn scope_is_popped_on_error() {
        let mut interpreter = Interpreter::with_print_handler(buffer_handler());
        let result: Result<(), &str> = interpreter.with_env_scope(|scoped| {
            scoped
                .env
                .define("inner", Binding::Initialized(Value::Nil));
            Err("stop")
        });

        assert_eq!(result, Err("stop"));
        assert_eq!(interpreter.env().depth(), 1);
        assert_eq!(interpreter.env().get("inner"), None);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let mut interpreter = Interpreter::with_print_handler(buffer_handler());
        interpreter.with_env_scope(|outer| {
            outer.with_env_scope(|inner| assert_eq!(inner.env().depth(), 3));
            assert_eq!(outer.env().depth(), 2);
        });
        assert_eq!(interpreter.env().depth(), 1);
    }
}
