//! C-ABI binding for test batteries that drive generators through function
//! pointers.
//!
//! [`Unif01Gen`] has the layout of TestU01's `unif01_Gen`:
//!
//! ```c
//! typedef struct {
//!    void *state;
//!    void *param;
//!    char *name;
//!    double (*GetU01) (void *param, void *state);
//!    unsigned long (*GetBits) (void *param, void *state);
//!    void (*Write) (void *state);
//! } unif01_Gen;
//! ```
//!
//! A [`Binding`] wires the callbacks to any [`UniformSource`] and keeps the
//! source mutably borrowed for as long as C code may call back into it.

use core::ffi::{c_char, c_ulong, c_void};
use core::marker::PhantomData;
use std::ffi::CString;
use std::io::{self, Write};

use crate::{Error, Result, UniformSource};

pub type GetU01Fn = unsafe extern "C" fn(param: *mut c_void, state: *mut c_void) -> f64;
pub type GetBitsFn = unsafe extern "C" fn(param: *mut c_void, state: *mut c_void) -> c_ulong;
pub type WriteFn = unsafe extern "C" fn(state: *mut c_void);

/// Generator descriptor passed to a battery.
#[repr(C)]
#[derive(Debug)]
pub struct Unif01Gen {
    pub state: *mut c_void,
    pub param: *mut c_void,
    pub name: *mut c_char,
    pub get_u01: GetU01Fn,
    pub get_bits: GetBitsFn,
    pub write: WriteFn,
}

/// Owns a [`Unif01Gen`] whose callbacks forward to `S`.
pub struct Binding<'a, S: UniformSource> {
    generator: Unif01Gen,
    _name: CString,
    _source: PhantomData<&'a mut S>,
}

impl<'a, S: UniformSource> Binding<'a, S> {
    /// Binds `source` under the report name `name`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidName`] if `name` contains a NUL byte.
    pub fn new(source: &'a mut S, name: &str) -> Result<Self> {
        let name = CString::new(name).map_err(|e| Error::InvalidName {
            position: e.nul_position(),
        })?;
        let state = core::ptr::from_mut(source).cast::<c_void>();
        Ok(Self {
            generator: Unif01Gen {
                state,
                param: state,
                // The battery only reads the name; the `CString` heap
                // allocation does not move when `Binding` does.
                name: name.as_ptr().cast_mut(),
                get_u01: get_u01::<S>,
                get_bits: get_bits::<S>,
                write: write_state,
            },
            _name: name,
            _source: PhantomData,
        })
    }

    /// Returns the descriptor to hand to C code.
    ///
    /// The pointer is valid for as long as `self` is alive and not moved.
    pub fn as_mut_ptr(&mut self) -> *mut Unif01Gen {
        &raw mut self.generator
    }

    pub const fn generator(&self) -> &Unif01Gen {
        &self.generator
    }
}

/// # Safety
///
/// `state` must be the pointer installed by [`Binding::new`] for the same
/// `S`, and the binding must still be alive.
unsafe extern "C" fn get_u01<S: UniformSource>(_param: *mut c_void, state: *mut c_void) -> f64 {
    // SAFETY: `state` points to the `S` borrowed mutably by the binding, per
    // the caller's contract.
    let source = unsafe { &mut *state.cast::<S>() };
    source.next_fraction()
}

/// # Safety
///
/// Same contract as [`get_u01`].
unsafe extern "C" fn get_bits<S: UniformSource>(
    _param: *mut c_void,
    state: *mut c_void,
) -> c_ulong {
    // SAFETY: see `get_u01`.
    let source = unsafe { &mut *state.cast::<S>() };
    c_ulong::from(source.next_raw_word())
}

/// Must not unwind: a closed stdout is ignored.
unsafe extern "C" fn write_state(_state: *mut c_void) {
    let _ = writeln!(
        io::stdout().lock(),
        "   (stream-fed generator: no internal state)"
    );
}
