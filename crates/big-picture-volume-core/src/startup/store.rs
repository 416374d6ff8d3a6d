use crate::CoreResult;

/// Per-user key-value area backing the launch-at-login preference.
///
/// Conceptually the `HKCU\...\CurrentVersion\Run` registry key; the binary
/// crate provides that implementation, tests use an in-memory map. Reads
/// return `Option` and writes return a `Result` so callers decide the
/// fallback: [`crate::StartupPreference`] treats every failure as "the
/// operation had no effect".
pub trait StartupStore {
    /// String value under `name`, if present and readable.
    fn string_value(&self, name: &str) -> Option<String>;

    /// Integer flag value under `name`, if present and readable.
    fn flag_value(&self, name: &str) -> Option<u32>;

    /// Write a string value under `name`.
    fn set_string(&mut self, name: &str, value: &str) -> CoreResult<()>;

    /// Write an integer flag value under `name`.
    fn set_flag(&mut self, name: &str, value: u32) -> CoreResult<()>;

    /// Delete the value under `name`.
    fn delete_value(&mut self, name: &str) -> CoreResult<()>;
}

impl<S: StartupStore + ?Sized> StartupStore for &mut S {
    fn string_value(&self, name: &str) -> Option<String> {
        (**self).string_value(name)
    }

    fn flag_value(&self, name: &str) -> Option<u32> {
        (**self).flag_value(name)
    }

    fn set_string(&mut self, name: &str, value: &str) -> CoreResult<()> {
        (**self).set_string(name, value)
    }

    fn set_flag(&mut self, name: &str, value: u32) -> CoreResult<()> {
        (**self).set_flag(name, value)
    }

    fn delete_value(&mut self, name: &str) -> CoreResult<()> {
        (**self).delete_value(name)
    }
}
