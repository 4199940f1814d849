pub mod entry_points;
pub mod library;

use std::{ffi::OsStr, ops::Deref};

use self::entry_points::EntryPoints;
use crate::error::Error;

/// Connection to the native texture library: the resolved entry points and,
/// when runtime-loaded, the library handle keeping them valid.
pub struct Context {
    entry: EntryPoints,
    _lib: Option<libloading::Library>,
}

impl Context {
    /// Loads the library named by `TEX2D_LIB_PATH`, falling back to the
    /// platform's default file name on the system search path.
    pub fn load() -> Result<Self, Error> {
        firestorm::profile_method!(load);

        let path = library::resolve(std::env::var_os(library::PATH_ENV).as_deref());
        Self::load_from(path)
    }

    pub fn load_from(path: impl AsRef<OsStr>) -> Result<Self, Error> {
        let (lib, entry) = library::load(path.as_ref())?;
        Ok(Self {
            entry,
            _lib: Some(lib),
        })
    }

    /// Builds a context over caller-resolved entry points. The caller is
    /// responsible for keeping the pointed-to code alive for the context's
    /// lifetime.
    pub const fn from_entry_points(entry: EntryPoints) -> Self {
        Self { entry, _lib: None }
    }
}

impl Deref for Context {
    type Target = EntryPoints;
    fn deref(&self) -> &Self::Target {
        &self.entry
    }
}
