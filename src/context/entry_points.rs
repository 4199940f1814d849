use std::ffi::c_char;

use crate::handle::RawTex;

pub type CreateFn = unsafe extern "C" fn() -> RawTex;
pub type CreateFileFn = unsafe extern "C" fn(*const c_char) -> RawTex;
pub type CreateMemFn = unsafe extern "C" fn(*const u8, usize) -> RawTex;
pub type SetActiveFn = unsafe extern "C" fn(RawTex, i32);
pub type DestroyFn = unsafe extern "C" fn(RawTex);

/// The five foreign entry points this binding consumes. Allocation failure is
/// signalled by the native side returning [`RawTex::SENTINEL`].
pub struct EntryPoints {
    pub create: CreateFn,
    pub create_file: CreateFileFn,
    pub create_mem: CreateMemFn,
    pub set_active: SetActiveFn,
    pub destroy: DestroyFn,
}

impl EntryPoints {
    /// # Safety
    ///
    /// The table's pointed-to code must still be loaded.
    pub unsafe fn create(&self) -> RawTex {
        (self.create)()
    }

    /// # Safety
    ///
    /// `path` must point to a valid NUL-terminated string.
    pub unsafe fn create_file(&self, path: *const c_char) -> RawTex {
        (self.create_file)(path)
    }

    /// # Safety
    ///
    /// `data` must point to `len` readable bytes.
    pub unsafe fn create_mem(&self, data: *const u8, len: usize) -> RawTex {
        (self.create_mem)(data, len)
    }

    /// # Safety
    ///
    /// `raw` must name a live resource not being released concurrently.
    pub unsafe fn set_active(&self, raw: RawTex, slot: i32) {
        (self.set_active)(raw, slot);
    }

    /// # Safety
    ///
    /// `raw` must name a live resource, and must not be passed to any native
    /// call again afterwards.
    pub unsafe fn destroy(&self, raw: RawTex) {
        (self.destroy)(raw);
    }
}
