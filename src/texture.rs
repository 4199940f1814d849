use std::{ffi::CString, mem, path::Path};

use crate::{Destroy, context::Context, error::Error, handle::RawTex};

/// Exclusive owner of one native texture. The wrapped reference is released
/// exactly once; afterwards the handle holds the sentinel and every operation
/// except release fails with [`Error::InvalidHandle`].
pub struct Texture {
    raw: RawTex,
}

impl Texture {
    pub fn create_empty(ctx: &Context) -> Result<Self, Error> {
        firestorm::profile_method!(create_empty);

        let raw = unsafe { ctx.create() };
        Self::from_allocation(raw)
    }

    pub fn create_from_path(ctx: &Context, path: impl AsRef<Path>) -> Result<Self, Error> {
        firestorm::profile_method!(create_from_path);

        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::EmptyPath);
        }

        let native_path = to_native_string(path)?;
        let raw = unsafe { ctx.create_file(native_path.as_ptr()) };
        Self::from_allocation(raw)
    }

    pub fn create_from_memory(ctx: &Context, data: &[u8]) -> Result<Self, Error> {
        firestorm::profile_method!(create_from_memory);

        if data.is_empty() {
            return Err(Error::EmptyData);
        }

        let raw = unsafe { ctx.create_mem(data.as_ptr(), data.len()) };
        Self::from_allocation(raw)
    }

    // The native side signals every allocation failure (bad path, undecodable
    // data, out of resources) by returning the sentinel; surface it here so a
    // constructed handle is always valid.
    fn from_allocation(raw: RawTex) -> Result<Self, Error> {
        if raw.is_sentinel() {
            return Err(Error::NativeAllocation);
        }
        log::trace!("allocated texture {raw:?}");
        Ok(Self { raw })
    }

    /// The native reference, for passing to foreign calls that consume
    /// textures. Callers must not release the handle while the reference is
    /// in concurrent use.
    pub fn raw(&self) -> Result<RawTex, Error> {
        if self.raw.is_sentinel() {
            return Err(Error::InvalidHandle);
        }
        Ok(self.raw)
    }

    pub fn bind(&self, ctx: &Context, slot: i32) -> Result<(), Error> {
        let raw = self.raw()?;
        unsafe { ctx.set_active(raw, slot) };
        Ok(())
    }

    pub const fn is_released(&self) -> bool {
        self.raw.is_sentinel()
    }

    /// Releases the native resource. Idempotent: further calls are no-ops.
    pub fn release(&mut self, ctx: &Context) {
        unsafe { self.destroy_with(ctx) };
    }

    /// Moves the native reference out, zeroing this handle so it will not
    /// release the resource. The caller takes over the single-release duty.
    pub fn into_raw(mut self) -> RawTex {
        mem::replace(&mut self.raw, RawTex::SENTINEL)
    }
}

impl Destroy<Context> for Texture {
    unsafe fn destroy_with(&mut self, ctx: &Context) {
        firestorm::profile_method!(destroy_with);

        let raw = mem::replace(&mut self.raw, RawTex::SENTINEL);
        if !raw.is_sentinel() {
            log::trace!("releasing texture {raw:?}");
            ctx.destroy(raw);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        if !self.raw.is_sentinel() {
            log::warn!(
                "texture {:?} dropped while still valid; the native resource leaks",
                self.raw
            );
        }
    }
}

#[cfg(unix)]
fn to_native_string(path: &Path) -> Result<CString, Error> {
    use std::os::unix::ffi::OsStrExt;
    Ok(CString::new(path.as_os_str().as_bytes())?)
}

#[cfg(not(unix))]
fn to_native_string(path: &Path) -> Result<CString, Error> {
    Ok(CString::new(path.to_string_lossy().as_bytes())?)
}
