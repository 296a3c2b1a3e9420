// CLASSIFICATION: COMMUNITY
// Filename: module.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-07-28

//! Module handle and lifecycle state machine.
//!
//! A host application owns the storage for each [`ModuleHandle`] and
//! drives it through the two lifecycle operations: `init` brings the
//! instance into service, `deinit` takes it back out. The handle is
//! `repr(C)` so the same storage can be owned by a C host and passed
//! through the entry points in [`crate::ffi`].

use log::{debug, info};
use thiserror::Error;

const STATE_UNINITIALIZED: u32 = 0;
const STATE_INITIALIZED: u32 = 1;

/// Lifecycle states a handle can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Fresh or released handle; `init` is the only valid operation.
    Uninitialized,
    /// Handle in service; `deinit` is the only valid transition out.
    Initialized,
}

/// Errors returned by the lifecycle operations.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("module already initialised")]
    AlreadyInitialized,
    #[error("module not initialised")]
    NotInitialized,
}

/// Hooks a module implements to observe its own lifecycle.
///
/// All notification methods default to no-ops so a module only
/// implements the transitions it cares about.
pub trait LifecycleHooks {
    /// Stable module name used in log lines.
    fn name(&self) -> &'static str;

    /// Called after the handle has entered service.
    fn did_init(&mut self) {}

    /// Called before a handle in service is released.
    fn will_deinit(&mut self) {}
}

/// Caller-owned per-instance module state.
///
/// The single state word is the only field the lifecycle contract
/// needs. Zeroed storage is a valid uninitialized handle, so C hosts
/// may `memset` the struct before first use.
#[repr(C)]
pub struct ModuleHandle {
    state: u32,
}

impl ModuleHandle {
    /// Construct an uninitialized handle.
    pub const fn new() -> Self {
        Self {
            state: STATE_UNINITIALIZED,
        }
    }

    /// Bring the handle into service.
    ///
    /// Fails with [`ModuleError::AlreadyInitialized`] if the handle is
    /// already in service; a handle is initialised at most once per
    /// lifecycle cycle.
    pub fn init(&mut self) -> Result<(), ModuleError> {
        if self.state == STATE_INITIALIZED {
            return Err(ModuleError::AlreadyInitialized);
        }
        self.state = STATE_INITIALIZED;
        debug!("module handle entered service");
        Ok(())
    }

    /// Take the handle out of service.
    ///
    /// Fails with [`ModuleError::NotInitialized`] when the handle was
    /// never initialised or has already been released.
    pub fn deinit(&mut self) -> Result<(), ModuleError> {
        if self.state != STATE_INITIALIZED {
            return Err(ModuleError::NotInitialized);
        }
        self.state = STATE_UNINITIALIZED;
        debug!("module handle left service");
        Ok(())
    }

    /// As [`ModuleHandle::init`], additionally notifying `module` once
    /// the handle is in service.
    pub fn init_with(&mut self, module: &mut dyn LifecycleHooks) -> Result<(), ModuleError> {
        self.init()?;
        info!("module {} entered service", module.name());
        module.did_init();
        Ok(())
    }

    /// As [`ModuleHandle::deinit`], notifying `module` before the
    /// handle is released. The hook only fires when the transition is
    /// valid.
    pub fn deinit_with(&mut self, module: &mut dyn LifecycleHooks) -> Result<(), ModuleError> {
        if !self.is_initialized() {
            return Err(ModuleError::NotInitialized);
        }
        module.will_deinit();
        self.deinit()?;
        info!("module {} left service", module.name());
        Ok(())
    }

    /// Current lifecycle state.
    ///
    /// An unrecognised state word reads as uninitialized so `init` can
    /// always bring non-zeroed caller storage into a defined state.
    pub fn state(&self) -> LifecycleState {
        match self.state {
            STATE_INITIALIZED => LifecycleState::Initialized,
            _ => LifecycleState::Uninitialized,
        }
    }

    /// Whether the handle is currently in service.
    pub fn is_initialized(&self) -> bool {
        self.state == STATE_INITIALIZED
    }
}

impl Default for ModuleHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_handle_is_uninitialized() {
        let handle = ModuleHandle::new();
        assert_eq!(handle.state(), LifecycleState::Uninitialized);
        assert!(!handle.is_initialized());
    }

    #[test]
    fn init_transitions_into_service() {
        let mut handle = ModuleHandle::new();
        handle.init().unwrap();
        assert_eq!(handle.state(), LifecycleState::Initialized);
    }

    #[test]
    fn deinit_transitions_out_of_service() {
        let mut handle = ModuleHandle::new();
        handle.init().unwrap();
        handle.deinit().unwrap();
        assert_eq!(handle.state(), LifecycleState::Uninitialized);
    }

    #[test]
    fn double_init_is_rejected() {
        let mut handle = ModuleHandle::new();
        handle.init().unwrap();
        assert!(matches!(handle.init(), Err(ModuleError::AlreadyInitialized)));
        assert!(handle.is_initialized());
    }

    #[test]
    fn deinit_without_init_is_rejected() {
        let mut handle = ModuleHandle::new();
        assert!(matches!(handle.deinit(), Err(ModuleError::NotInitialized)));
    }
}
