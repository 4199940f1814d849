use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use libloading::Library;

use super::entry_points::EntryPoints;
use crate::error::Error;

/// Environment variable naming an explicit library path, checked before the
/// platform default.
pub const PATH_ENV: &str = "TEX2D_LIB_PATH";

#[cfg(target_os = "windows")]
const DEFAULT_NAME: &str = "tex2d.dll";
#[cfg(target_os = "macos")]
const DEFAULT_NAME: &str = "libtex2d.dylib";
#[cfg(all(unix, not(target_os = "macos")))]
const DEFAULT_NAME: &str = "libtex2d.so";

pub fn resolve(override_path: Option<&OsStr>) -> PathBuf {
    override_path.map_or_else(|| PathBuf::from(DEFAULT_NAME), PathBuf::from)
}

pub fn load(path: &OsStr) -> Result<(Library, EntryPoints), Error> {
    log::debug!(
        "loading native texture library from {}",
        Path::new(path).display()
    );

    let lib = unsafe { Library::new(path) }.map_err(Error::LibraryLoad)?;
    let entry = EntryPoints {
        create: unsafe { symbol(&lib, "tex2d_create") }?,
        create_file: unsafe { symbol(&lib, "tex2d_create_file") }?,
        create_mem: unsafe { symbol(&lib, "tex2d_create_mem") }?,
        set_active: unsafe { symbol(&lib, "tex2d_set_active") }?,
        destroy: unsafe { symbol(&lib, "tex2d_destroy") }?,
    };

    log::debug!("resolved all texture library entry points");

    Ok((lib, entry))
}

unsafe fn symbol<T: Copy>(lib: &Library, name: &'static str) -> Result<T, Error> {
    lib.get::<T>(name.as_bytes())
        .map(|sym| *sym)
        .map_err(|_| Error::MissingSymbol { name })
}
